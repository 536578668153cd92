use super::{DEFAULT_CO2_CSV, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPERATURE_CSV, VERSION};
use clap::{value_t, App, Arg, ArgMatches};
use std::path::PathBuf;

pub const DEFAULT_MONTH: &str = "February";

/// Settings of one `climate_plot` run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub temperature_csv: PathBuf,
    pub co2_csv: PathBuf,
    pub output_dir: PathBuf,
    pub start_year: i32,
    pub end_year: i32,
    pub month: String,
    pub co2_ymin: Option<f64>,
    pub co2_ymax: Option<f64>,
    pub temp_ymin: Option<f64>,
    pub temp_ymax: Option<f64>,
    pub show: bool,
}

fn app() -> App<'static, 'static> {
    let arg_temperature = Arg::with_name("temperature_csv")
        .help("csv file with the temperature per month, indexed by Year")
        .short("t")
        .long("temperature")
        .takes_value(true)
        .default_value(DEFAULT_TEMPERATURE_CSV);
    let arg_co2 = Arg::with_name("co2_csv")
        .help("csv file with the Carbon column, indexed by Year")
        .short("c")
        .long("co2")
        .takes_value(true)
        .default_value(DEFAULT_CO2_CSV);
    let arg_outdir = Arg::with_name("output_dir")
        .help("directory for co2.svg and temp.svg, overwritten at every run")
        .short("o")
        .long("outdir")
        .takes_value(true)
        .default_value(DEFAULT_OUTPUT_DIR);
    let arg_start = Arg::with_name("start_year")
        .help("first year to plot")
        .short("s")
        .long("start")
        .takes_value(true)
        .default_value("1816");
    let arg_end = Arg::with_name("end_year")
        .help("last year to plot, must be greater than the first")
        .short("e")
        .long("end")
        .takes_value(true)
        .default_value("2012");
    let arg_month = Arg::with_name("month")
        .help("month of the temperature chart, case-insensitive")
        .short("m")
        .long("month")
        .takes_value(true)
        .default_value(DEFAULT_MONTH);
    let bound = |name: &'static str, long: &'static str, help: &'static str| {
        Arg::with_name(name)
            .help(help)
            .long(long)
            .takes_value(true)
            .allow_hyphen_values(true)
    };
    let arg_no_show = Arg::with_name("no_show")
        .help("only write the charts, do not print them on the terminal")
        .long("no-show")
        .takes_value(false);

    App::new("Climate_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the yearly CO2 and temperature time series")
        .arg(arg_temperature)
        .arg(arg_co2)
        .arg(arg_outdir)
        .arg(arg_start)
        .arg(arg_end)
        .arg(arg_month)
        .arg(bound("co2_ymin", "co2-ymin", "y-axis minimum of the CO2 chart"))
        .arg(bound("co2_ymax", "co2-ymax", "y-axis maximum of the CO2 chart"))
        .arg(bound("temp_ymin", "temp-ymin", "y-axis minimum of the temperature chart"))
        .arg(bound("temp_ymax", "temp-ymax", "y-axis maximum of the temperature chart"))
        .arg(arg_no_show)
}

fn optional_f64(cli_args: &ArgMatches, name: &str) -> Result<Option<f64>, clap::Error> {
    if cli_args.is_present(name) {
        Ok(Some(value_t!(cli_args, name, f64)?))
    } else {
        Ok(None)
    }
}

fn config_from(cli_args: &ArgMatches) -> Result<PlotConfig, clap::Error> {
    Ok(PlotConfig {
        temperature_csv: PathBuf::from(cli_args.value_of("temperature_csv").unwrap_or_default()),
        co2_csv: PathBuf::from(cli_args.value_of("co2_csv").unwrap_or_default()),
        output_dir: PathBuf::from(cli_args.value_of("output_dir").unwrap_or_default()),
        start_year: value_t!(cli_args, "start_year", i32)?,
        end_year: value_t!(cli_args, "end_year", i32)?,
        month: String::from(cli_args.value_of("month").unwrap_or(DEFAULT_MONTH)),
        co2_ymin: optional_f64(cli_args, "co2_ymin")?,
        co2_ymax: optional_f64(cli_args, "co2_ymax")?,
        temp_ymin: optional_f64(cli_args, "temp_ymin")?,
        temp_ymax: optional_f64(cli_args, "temp_ymax")?,
        show: !cli_args.is_present("no_show"),
    })
}

/// Takes the CLI arguments that control the plotting of the two charts;
/// exits with clap's message on invalid values.
pub fn parse_cli() -> PlotConfig {
    let cli_args = app().get_matches();
    config_from(&cli_args).unwrap_or_else(|e| e.exit())
}
