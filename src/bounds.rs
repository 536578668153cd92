use crate::error::ValidationError;
use crate::table::SeriesSlice;
use crate::ChartKind;

pub const CO2_MIN_DIVISOR: f64 = 1.3;
pub const CO2_MAX_FACTOR: f64 = 1.15;
pub const TEMPERATURE_MARGIN: f64 = 1.2;

/// y-axis limits of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub y_min: f64,
    pub y_max: f64,
}

/// min and max of the slice, ignoring NAN and infinities; None when there is no value left
pub fn finite_min_and_max(s: &[f64]) -> Option<(f64, f64)> {
    let mut finite = s.iter().copied().filter(|v| v.is_finite());
    let first = finite.next()?;
    let (mut min, mut max) = (first, first);
    for v in finite {
        if v > max {
            max = v
        }
        if v < min {
            min = v
        }
    }
    Some((min, max))
}

/// Default limits from the data extremes, using the margin rule of each chart kind.
/// Temperatures may be negative, so the lower margin always moves away from zero.
pub fn default_bounds(kind: ChartKind, min: f64, max: f64) -> AxisBounds {
    match kind {
        ChartKind::Co2 => AxisBounds {
            y_min: min / CO2_MIN_DIVISOR,
            y_max: max * CO2_MAX_FACTOR,
        },
        ChartKind::Temperature => AxisBounds {
            y_min: if min > 0. {
                min / TEMPERATURE_MARGIN
            } else {
                min * TEMPERATURE_MARGIN
            },
            y_max: max * TEMPERATURE_MARGIN,
        },
    }
}

/// Resolve the y-axis limits for a slice.
/// An explicit limit always wins over the default, zero included.
pub fn axis_bounds(
    kind: ChartKind,
    slice: &SeriesSlice,
    y_min: Option<f64>,
    y_max: Option<f64>,
) -> Result<AxisBounds, ValidationError> {
    let (min, max) =
        finite_min_and_max(slice.values).ok_or_else(|| ValidationError::EmptySlice {
            series: slice.name.to_string(),
            start: slice.years.first().copied().unwrap_or_default(),
            end: slice.years.last().copied().unwrap_or_default(),
        })?;
    let defaults = default_bounds(kind, min, max);
    let bounds = AxisBounds {
        y_min: y_min.unwrap_or(defaults.y_min),
        y_max: y_max.unwrap_or(defaults.y_max),
    };
    if !bounds.y_min.is_finite() || !bounds.y_max.is_finite() {
        return Err(ValidationError::NonFiniteAxis {
            y_min: bounds.y_min,
            y_max: bounds.y_max,
        });
    }
    if bounds.y_min >= bounds.y_max {
        return Err(ValidationError::DegenerateAxis {
            y_min: bounds.y_min,
            y_max: bounds.y_max,
        });
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn slice<'a>(years: &'a [i32], values: &'a [f64]) -> SeriesSlice<'a> {
        SeriesSlice {
            name: "Carbon",
            years,
            values,
        }
    }

    #[test]
    fn co2_defaults() {
        let s = slice(&[1959, 1990, 2019], &[313.0, 354.4, 414.2]);
        let b = axis_bounds(ChartKind::Co2, &s, None, None).expect("valid bounds");
        assert_relative_eq!(b.y_min, 313.0 / 1.3);
        assert_relative_eq!(b.y_min, 240.769, epsilon = 1e-3);
        assert_relative_eq!(b.y_max, 476.33, epsilon = 1e-3);
    }

    #[test]
    fn temperature_negative_minimum_grows_away_from_zero() {
        let b = default_bounds(ChartKind::Temperature, -5.0, 10.0);
        assert_relative_eq!(b.y_min, -6.0);
        assert_relative_eq!(b.y_max, 12.0);
    }

    #[test]
    fn temperature_positive_minimum_is_divided() {
        let b = default_bounds(ChartKind::Temperature, 5.0, 10.0);
        assert_relative_eq!(b.y_min, 4.1667, epsilon = 1e-4);
    }

    #[test]
    fn temperature_zero_minimum_stays_zero() {
        let b = default_bounds(ChartKind::Temperature, 0.0, 10.0);
        assert_relative_eq!(b.y_min, 0.0);
    }

    #[test]
    fn explicit_bounds_override_defaults() {
        let s = slice(&[1, 2], &[313.0, 414.2]);
        let b = axis_bounds(ChartKind::Co2, &s, Some(200.0), None).expect("valid bounds");
        assert_relative_eq!(b.y_min, 200.0);
        assert_relative_eq!(b.y_max, 476.33, epsilon = 1e-3);
        let b = axis_bounds(ChartKind::Co2, &s, None, Some(500.0)).expect("valid bounds");
        assert_relative_eq!(b.y_min, 240.769, epsilon = 1e-3);
        assert_relative_eq!(b.y_max, 500.0);
    }

    #[test]
    fn explicit_zero_is_not_unset() {
        let s = slice(&[1, 2], &[313.0, 414.2]);
        let b = axis_bounds(ChartKind::Co2, &s, Some(0.0), None).expect("valid bounds");
        assert_eq!(b.y_min, 0.0);

        let s = slice(&[1, 2], &[-8.0, -3.0]);
        let b = axis_bounds(ChartKind::Temperature, &s, None, Some(0.0)).expect("valid bounds");
        assert_relative_eq!(b.y_min, -9.6);
        assert_eq!(b.y_max, 0.0);
    }

    #[test]
    fn nan_values_are_skipped() {
        let s = slice(&[1, 2, 3], &[f64::NAN, 5.0, 7.0]);
        let b = axis_bounds(ChartKind::Temperature, &s, None, None).expect("valid bounds");
        assert_relative_eq!(b.y_min, 5.0 / 1.2);
        assert_relative_eq!(b.y_max, 8.4);
    }

    #[test]
    fn all_nan_slice_is_empty() {
        let s = slice(&[1816, 1817], &[f64::NAN, f64::NAN]);
        assert_eq!(
            axis_bounds(ChartKind::Co2, &s, None, None),
            Err(ValidationError::EmptySlice {
                series: "Carbon".to_string(),
                start: 1816,
                end: 1817
            })
        );
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let s = slice(&[1, 2], &[313.0, 414.2]);
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, Some(500.0), Some(400.0)),
            Err(ValidationError::DegenerateAxis { .. })
        ));
        let s = slice(&[1, 2], &[0.0, 0.0]);
        assert!(matches!(
            axis_bounds(ChartKind::Temperature, &s, None, None),
            Err(ValidationError::DegenerateAxis { .. })
        ));
    }

    #[test]
    fn infinite_limits_are_rejected() {
        let s = slice(&[1, 2], &[313.0, 414.2]);
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, None, Some(f64::INFINITY)),
            Err(ValidationError::NonFiniteAxis { .. })
        ));
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, Some(f64::NEG_INFINITY), None),
            Err(ValidationError::NonFiniteAxis { .. })
        ));
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, Some(f64::NAN), None),
            Err(ValidationError::NonFiniteAxis { .. })
        ));
    }

    #[test]
    fn default_overflow_is_rejected() {
        let s = slice(&[1, 2], &[1.0, f64::MAX]);
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, None, None),
            Err(ValidationError::NonFiniteAxis { .. })
        ));
    }

    #[test]
    fn infinite_values_are_skipped() {
        let s = slice(&[1, 2, 3], &[313.0, f64::INFINITY, 414.2]);
        let b = axis_bounds(ChartKind::Co2, &s, None, None).expect("valid bounds");
        assert_relative_eq!(b.y_max, 476.33, epsilon = 1e-3);
        let s = slice(&[1, 2], &[f64::INFINITY, f64::NEG_INFINITY]);
        assert!(matches!(
            axis_bounds(ChartKind::Co2, &s, None, None),
            Err(ValidationError::EmptySlice { .. })
        ));
    }

    #[test]
    fn min_and_max_of_values() {
        assert_eq!(finite_min_and_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(
            finite_min_and_max(&[f64::NEG_INFINITY, 2.0, f64::NAN]),
            Some((2.0, 2.0))
        );
        assert_eq!(finite_min_and_max(&[]), None);
    }
}
