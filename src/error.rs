use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading one of the input csv files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} has no `{column}` column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{}, line {line}: invalid year `{value}`", .path.display())]
    InvalidYear {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("{}, line {line}: invalid value `{value}` in column `{column}`", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
    #[error("{}, line {line}: year {year} is duplicated or out of order", .path.display())]
    UnorderedYear { path: PathBuf, line: u64, year: i32 },
    #[error("{} contains no data rows", .path.display())]
    Empty { path: PathBuf },
}

/// A plot request that cannot be satisfied by the loaded data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("end year {end} must be greater than start year {start}")]
    RangeInverted { start: i32, end: i32 },
    #[error(
        "year range {start}-{end} out of bounds, \
         earliest year is {min_year}, latest year is {max_year}"
    )]
    OutOfBounds {
        start: i32,
        end: i32,
        min_year: i32,
        max_year: i32,
    },
    #[error("no column named `{name}`, available columns: {available}")]
    UnknownSeries { name: String, available: String },
    #[error("no {series} values between {start} and {end}")]
    EmptySlice {
        series: String,
        start: i32,
        end: i32,
    },
    #[error("y-axis minimum {y_min} must be below maximum {y_max}")]
    DegenerateAxis { y_min: f64, y_max: f64 },
    #[error("y-axis limits must be finite, got {y_min} and {y_max}")]
    NonFiniteAxis { y_min: f64, y_max: f64 },
}

/// Any reason a chart was not produced.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("could not prepare {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not draw {}: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}
