//! Loose date-time pattern check
//!
//! Trade history filters take `YYYY-MM-DD HH:MM:SS` strings. The check here is
//! purely positional: each character must fall in a fixed range, equivalent to
//! `[0-9]{4}-[0-1][0-9]-[0-3][0-9] [0-2][0-9]:[0-5][0-9]:[0-5][0-9]` anchored at
//! the start only, so trailing text such as `.000` or `Z` is accepted and sent
//! unchanged. It is not calendar aware, so `2023-19-39 29:00:00` passes.

use crate::error::{TypeError, TypeResult};

/// Accepted byte range for each position of `YYYY-MM-DD HH:MM:SS`
const DATE_TIME_PATTERN: [(u8, u8); 19] = [
    (b'0', b'9'),
    (b'0', b'9'),
    (b'0', b'9'),
    (b'0', b'9'),
    (b'-', b'-'),
    (b'0', b'1'),
    (b'0', b'9'),
    (b'-', b'-'),
    (b'0', b'3'),
    (b'0', b'9'),
    (b' ', b' '),
    (b'0', b'2'),
    (b'0', b'9'),
    (b':', b':'),
    (b'0', b'5'),
    (b'0', b'9'),
    (b':', b':'),
    (b'0', b'5'),
    (b'0', b'9'),
];

/// Returns true if `value` starts with the `YYYY-MM-DD HH:MM:SS` shape
pub fn is_date_time_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= DATE_TIME_PATTERN.len()
        && bytes[..DATE_TIME_PATTERN.len()]
            .iter()
            .zip(DATE_TIME_PATTERN.iter())
            .all(|(b, (lo, hi))| (*lo..=*hi).contains(b))
}

/// Validate a date argument, naming the argument in the error
pub fn validate_date_time(field: &'static str, value: &str) -> TypeResult<()> {
    if is_date_time_pattern(value) {
        Ok(())
    } else {
        Err(TypeError::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed() {
        assert!(is_date_time_pattern("2023-01-31 23:59:59"));
        assert!(is_date_time_pattern("1999-12-01 00:00:00"));
    }

    #[test]
    fn test_pattern_only_not_calendar() {
        // Month 19, day 39 and hour 29 all fit the digit ranges
        assert!(is_date_time_pattern("2023-19-39 29:00:00"));
    }

    #[test]
    fn test_rejects_out_of_range_digits() {
        assert!(!is_date_time_pattern("2023-13-45 99:99:99"));
        assert!(!is_date_time_pattern("2023-01-01 30:00:00"));
        assert!(!is_date_time_pattern("2023-01-01 00:60:00"));
        assert!(!is_date_time_pattern("2023-21-01 00:00:00"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(!is_date_time_pattern(""));
        assert!(!is_date_time_pattern("2023-01-01"));
        assert!(!is_date_time_pattern("2023-01-01T00:00:00"));
        assert!(!is_date_time_pattern("2023-01-01 00:00:0"));
        assert!(!is_date_time_pattern("２023-01-01 00:00:00"));
    }

    #[test]
    fn test_accepts_trailing_text() {
        assert!(is_date_time_pattern("2024-01-01 00:00:00.000"));
        assert!(is_date_time_pattern("2024-01-01 00:00:00Z"));
        assert!(validate_date_time("start_date", "2024-01-01 00:00:00 UTC").is_ok());
    }

    #[test]
    fn test_validate_names_field() {
        let err = validate_date_time("end_date", "soon").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidDate {
                field: "end_date",
                value: "soon".to_string()
            }
        );
    }
}
