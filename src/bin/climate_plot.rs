use climate_lpp::plot::parse_cli;
use climate_lpp::{init_tracing, ClimateData};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();
    let cfg = parse_cli();
    info!(
        "read data from {} and {} and plot to {}",
        cfg.temperature_csv.display(),
        cfg.co2_csv.display(),
        cfg.output_dir.display()
    );
    let climate = match ClimateData::from_csv(&cfg.temperature_csv, &cfg.co2_csv) {
        Ok(c) => c.with_output_dir(&cfg.output_dir),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // a rejected chart does not stop the other one
    if let Err(e) = climate.plot_co2(
        cfg.start_year,
        cfg.end_year,
        cfg.co2_ymin,
        cfg.co2_ymax,
        cfg.show,
    ) {
        error!("CO2 chart not produced: {}", e);
    }
    if let Err(e) = climate.plot_temperature(
        &cfg.month,
        cfg.start_year,
        cfg.end_year,
        cfg.temp_ymin,
        cfg.temp_ymax,
        cfg.show,
    ) {
        error!("temperature chart not produced: {}", e);
    }
    ExitCode::SUCCESS
}
