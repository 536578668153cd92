use crate::error::ValidationError;

/// Checks that [start, end] is a non-empty range inside [min_year, max_year].
/// Nothing is clamped: an invalid range is rejected as a whole.
pub fn validate_range(
    start: i32,
    end: i32,
    min_year: i32,
    max_year: i32,
) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::RangeInverted { start, end });
    }
    if start < min_year || end > max_year {
        return Err(ValidationError::OutOfBounds {
            start,
            end,
            min_year,
            max_year,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_and_inner_ranges() {
        assert_eq!(validate_range(1816, 2012, 1816, 2012), Ok(()));
        assert_eq!(validate_range(1900, 1901, 1816, 2012), Ok(()));
    }

    #[test]
    fn rejects_end_before_or_equal_start() {
        assert_eq!(
            validate_range(1950, 1950, 1816, 2012),
            Err(ValidationError::RangeInverted {
                start: 1950,
                end: 1950
            })
        );
        assert_eq!(
            validate_range(1960, 1950, 1816, 2012),
            Err(ValidationError::RangeInverted {
                start: 1960,
                end: 1950
            })
        );
    }

    #[test]
    fn inverted_is_reported_before_out_of_bounds() {
        assert!(matches!(
            validate_range(3000, 1000, 1816, 2012),
            Err(ValidationError::RangeInverted { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_with_valid_range_in_message() {
        let err = validate_range(1815, 2000, 1816, 2012).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfBounds {
                start: 1815,
                end: 2000,
                min_year: 1816,
                max_year: 2012
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("earliest year is 1816"));
        assert!(msg.contains("latest year is 2012"));

        assert!(matches!(
            validate_range(1900, 2013, 1816, 2012),
            Err(ValidationError::OutOfBounds { .. })
        ));
    }
}
