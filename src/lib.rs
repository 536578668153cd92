use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
pub mod ascii;
pub mod bounds;
pub mod error;
pub mod plot;
pub mod range;
pub mod render;
pub mod table;
pub mod web;

pub use bounds::AxisBounds;
pub use error::{DataLoadError, PlotError, ValidationError};
pub use table::{Series, SeriesSlice, YearTable};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const YEAR_COLUMN: &str = "Year";
pub const CO2_COLUMN: &str = "Carbon";

pub const DEFAULT_TEMPERATURE_CSV: &str = "temperature.csv";
pub const DEFAULT_CO2_CSV: &str = "co2.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "static";
pub const DEFAULT_START_YEAR: i32 = 1816;
pub const DEFAULT_END_YEAR: i32 = 2012;

/// The two charts, each with its own margins, labels, and fixed output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Co2,
    Temperature,
}

impl ChartKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Co2 => "co2.svg",
            ChartKind::Temperature => "temp.svg",
        }
    }

    pub fn title(self, series: &str) -> String {
        match self {
            ChartKind::Co2 => "Atmospheric CO2 per year".to_string(),
            ChartKind::Temperature => format!("Temperature per year for {}", series),
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            ChartKind::Co2 => "CO2",
            ChartKind::Temperature => "Temperature [C]",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            ChartKind::Co2 => CO2_COLUMN,
            ChartKind::Temperature => "Temperature",
        }
    }
}

/// A single chart to draw. `None` bounds fall back to the data-derived defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub start_year: i32,
    pub end_year: i32,
    pub series_name: String,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub show: bool,
}

/// Temperature and CO2 tables, loaded once and never modified,
/// and the directory the charts are written to.
#[derive(Debug, Clone)]
pub struct ClimateData {
    temperature: YearTable,
    co2: YearTable,
    output_dir: PathBuf,
}

impl ClimateData {
    pub fn new(temperature: YearTable, co2: YearTable) -> ClimateData {
        ClimateData {
            temperature,
            co2,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Init from the temperature and CO2 csv files, both indexed by `Year`.
    pub fn from_csv(
        temperature_file: &Path,
        co2_file: &Path,
    ) -> Result<ClimateData, DataLoadError> {
        let temperature = YearTable::from_csv(temperature_file)?;
        let co2 = YearTable::from_csv(co2_file)?;
        info!(
            "loaded temperature {}-{} and CO2 {}-{}",
            temperature.min_year(),
            temperature.max_year(),
            co2.min_year(),
            co2.max_year()
        );
        Ok(ClimateData::new(temperature, co2))
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> ClimateData {
        self.output_dir = dir.into();
        self
    }

    pub fn temperature(&self) -> &YearTable {
        &self.temperature
    }

    pub fn co2(&self) -> &YearTable {
        &self.co2
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// where the chart of this kind is written
    pub fn chart_path(&self, kind: ChartKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    fn table(&self, kind: ChartKind) -> &YearTable {
        match kind {
            ChartKind::Co2 => &self.co2,
            ChartKind::Temperature => &self.temperature,
        }
    }

    /// Validate the request, derive the axis bounds, and write the chart.
    /// Nothing is written unless the request is valid.
    /// With `show`, the chart is also printed to the terminal.
    pub fn plot(&self, kind: ChartKind, request: &PlotRequest) -> Result<PathBuf, PlotError> {
        let table = self.table(kind);
        table.validate_range(request.start_year, request.end_year)?;
        let slice = table.slice(&request.series_name, request.start_year, request.end_year)?;
        if slice.is_empty() {
            return Err(ValidationError::EmptySlice {
                series: request.series_name.clone(),
                start: request.start_year,
                end: request.end_year,
            }
            .into());
        }
        let bounds = bounds::axis_bounds(kind, &slice, request.y_min, request.y_max)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| PlotError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let fout = self.chart_path(kind);
        render::render_svg(kind, &slice, &bounds, &fout).map_err(|e| PlotError::Draw {
            path: fout.clone(),
            message: e.to_string(),
        })?;
        info!(
            "plotted {} {}-{} to {}, y in [{:.2}, {:.2}]",
            slice.name,
            request.start_year,
            request.end_year,
            fout.display(),
            bounds.y_min,
            bounds.y_max
        );

        if request.show {
            print!(
                "{}",
                ascii::render_ascii(
                    &kind.title(slice.name),
                    &slice,
                    &bounds,
                    ascii::DEFAULT_WIDTH,
                    ascii::DEFAULT_HEIGHT,
                )
            );
        }
        Ok(fout)
    }

    /// plots the `Carbon` series per year
    pub fn plot_co2(
        &self,
        start_year: i32,
        end_year: i32,
        y_min: Option<f64>,
        y_max: Option<f64>,
        show: bool,
    ) -> Result<PathBuf, PlotError> {
        let request = PlotRequest {
            start_year,
            end_year,
            series_name: CO2_COLUMN.to_string(),
            y_min,
            y_max,
            show,
        };
        self.plot(ChartKind::Co2, &request)
    }

    /// plots the temperature of one month per year, the month name is case-insensitive
    pub fn plot_temperature(
        &self,
        month: &str,
        start_year: i32,
        end_year: i32,
        y_min: Option<f64>,
        y_max: Option<f64>,
        show: bool,
    ) -> Result<PathBuf, PlotError> {
        // a bad range is reported before a bad month
        self.temperature.validate_range(start_year, end_year)?;
        let series_name = self.temperature.resolve_month(month)?;
        let request = PlotRequest {
            start_year,
            end_year,
            series_name,
            y_min,
            y_max,
            show,
        };
        self.plot(ChartKind::Temperature, &request)
    }
}

/// Log to stderr, with the level taken from RUST_LOG or `info` by default.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        warn!("tracing subscriber already set");
    }
}
