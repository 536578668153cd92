use crate::error::{DataLoadError, ValidationError};
use crate::range::validate_range;
use crate::YEAR_COLUMN;
use chrono::Month;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One named numeric column of a `YearTable`.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// A borrowed, inclusive year range of a single series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSlice<'a> {
    pub name: &'a str,
    pub years: &'a [i32],
    pub values: &'a [f64],
}

impl<'a> SeriesSlice<'a> {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// contiguous runs of (year, value) without NAN or infinities,
    /// so a missing measurement leaves a gap in the drawn line
    pub fn runs(&self) -> Vec<Vec<(i32, f64)>> {
        let mut runs = Vec::new();
        let mut current: Vec<(i32, f64)> = Vec::new();
        for (&year, &value) in self.years.iter().zip(self.values.iter()) {
            if !value.is_finite() {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            } else {
                current.push((year, value));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Year-indexed table: unique ascending years and one value per year for each series.
/// Missing cells are stored as NAN.
#[derive(Debug, Clone)]
pub struct YearTable {
    years: Vec<i32>,
    series: Vec<Series>,
}

impl YearTable {
    /// Build a table from already parsed columns.
    /// Years must be non-empty and strictly ascending,
    /// and every series must have one value per year.
    pub fn new(years: Vec<i32>, series: Vec<Series>) -> Option<YearTable> {
        let ascending = years.windows(2).all(|w| w[0] < w[1]);
        let aligned = series.iter().all(|s| s.values.len() == years.len());
        if years.is_empty() || !ascending || !aligned {
            return None;
        }
        Some(YearTable { years, series })
    }

    /// Init a YearTable from csv; the `Year` column is the index, every other column a series.
    /// Empty cells become NAN, anything else that is not a number is an error.
    pub fn from_csv(fin: &Path) -> Result<YearTable, DataLoadError> {
        let file = File::open(fin).map_err(|source| DataLoadError::Open {
            path: fin.to_path_buf(),
            source,
        })?;
        YearTable::from_reader(file, fin)
    }

    /// same as `from_csv`, `path` is only used to name the source in errors
    pub fn from_reader<R: Read>(rdr: R, path: &Path) -> Result<YearTable, DataLoadError> {
        let csv_err = |source: csv::Error| DataLoadError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        let headers = reader.headers().map_err(csv_err)?.clone();
        let year_idx = headers
            .iter()
            .position(|h| h == YEAR_COLUMN)
            .ok_or_else(|| DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column: YEAR_COLUMN,
            })?;
        let columns: Vec<(usize, &str)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != year_idx)
            .collect();

        let mut years: Vec<i32> = Vec::new();
        let mut series: Vec<Series> = columns
            .iter()
            .map(|(_, name)| Series {
                name: name.to_string(),
                values: Vec::new(),
            })
            .collect();

        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let year_str = record.get(year_idx).unwrap_or_default();
            let year: i32 = year_str.parse().map_err(|_| DataLoadError::InvalidYear {
                path: path.to_path_buf(),
                line,
                value: year_str.to_string(),
            })?;
            if let Some(&previous) = years.last() {
                if year <= previous {
                    return Err(DataLoadError::UnorderedYear {
                        path: path.to_path_buf(),
                        line,
                        year,
                    });
                }
            }
            years.push(year);
            for ((idx, name), s) in columns.iter().zip(series.iter_mut()) {
                let field = record.get(*idx).unwrap_or_default();
                let value = if field.is_empty() {
                    f64::NAN
                } else {
                    field.parse().map_err(|_| DataLoadError::InvalidValue {
                        path: path.to_path_buf(),
                        line,
                        column: name.to_string(),
                        value: field.to_string(),
                    })?
                };
                s.values.push(value);
            }
        }

        debug!(
            "read {} years and {} series from {}",
            years.len(),
            series.len(),
            path.display()
        );
        YearTable::new(years, series).ok_or_else(|| DataLoadError::Empty {
            path: path.to_path_buf(),
        })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn min_year(&self) -> i32 {
        self.years[0]
    }

    pub fn max_year(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// check the requested range against the years in the table
    pub fn validate_range(&self, start: i32, end: i32) -> Result<(), ValidationError> {
        validate_range(start, end, self.min_year(), self.max_year())
    }

    /// the rows with start <= year <= end of the named series
    pub fn slice(
        &self,
        name: &str,
        start: i32,
        end: i32,
    ) -> Result<SeriesSlice<'_>, ValidationError> {
        let series = self.series(name).ok_or_else(|| self.unknown_series(name))?;
        let lo = self.years.partition_point(|&y| y < start);
        let hi = self.years.partition_point(|&y| y <= end).max(lo);
        Ok(SeriesSlice {
            name: &series.name,
            years: &self.years[lo..hi],
            values: &series.values[lo..hi],
        })
    }

    /// Resolve a month given in any case to the matching column name.
    /// The name is title cased first ("FEBRUARY" -> "February");
    /// if that is not a column, calendar abbreviations ("feb") are tried.
    pub fn resolve_month(&self, month: &str) -> Result<String, ValidationError> {
        let name = title_case(month);
        if self.series(&name).is_some() {
            return Ok(name);
        }
        if let Ok(m) = name.parse::<Month>() {
            let full = m.name();
            if self.series(full).is_some() {
                return Ok(full.to_string());
            }
        }
        Err(self.unknown_series(&name))
    }

    fn unknown_series(&self, name: &str) -> ValidationError {
        ValidationError::UnknownSeries {
            name: name.to_string(),
            available: self.series_names().join(", "),
        }
    }
}

/// upper case the first letter of every word, lower case the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
