use climate_lpp::web::{parse_cli, serve, DEFAULT_MONTH};
use climate_lpp::{init_tracing, ClimateData, DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cfg = parse_cli();
    let climate = match ClimateData::from_csv(&cfg.temperature_csv, &cfg.co2_csv) {
        Ok(c) => c.with_output_dir(&cfg.output_dir),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // render once before serving, never shown on the terminal
    if let Err(e) = climate.plot_co2(DEFAULT_START_YEAR, DEFAULT_END_YEAR, None, None, false) {
        error!("CO2 chart not produced: {}", e);
    }
    if let Err(e) = climate.plot_temperature(
        DEFAULT_MONTH,
        DEFAULT_START_YEAR,
        DEFAULT_END_YEAR,
        None,
        None,
        false,
    ) {
        error!("temperature chart not produced: {}", e);
    }

    serve(cfg.output_dir, cfg.addr).await;
    ExitCode::SUCCESS
}
