//! Converts local wall-clock time strings into absolute instants.

use chrono::{DateTime, FixedOffset};

use super::error::CollectorError;

/// Builds absolute timestamps from local `YYYY-MM-DDTHH:MM` strings.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TimeWindowBuilder;

impl TimeWindowBuilder {
    /// Resolves a local date-time string against a fixed UTC offset.
    ///
    /// The offset is rendered as a `±HH:00` suffix (whole-hour granularity;
    /// any sub-hour remainder is truncated toward zero) and appended to the
    /// input before parsing the whole thing as a zoned timestamp. Inputs that
    /// do not match the `YYYY-MM-DDTHH:MM` pattern, or that denote an
    /// impossible date or time, fail with [`CollectorError::Parse`]. The
    /// pattern is fixed-width: chrono would happily take `2023-1-1T2:5`, so
    /// the shape is checked up front.
    pub fn build(
        input: &str,
        utc_offset_seconds: i32,
    ) -> Result<DateTime<FixedOffset>, CollectorError> {
        let trimmed = input.trim();
        if !Self::matches_pattern(trimmed) {
            return Err(CollectorError::Parse {
                input: input.to_string(),
                source: None,
            });
        }

        let stamped = format!("{}{}", trimmed, Self::offset_suffix(utc_offset_seconds));

        DateTime::parse_from_str(&stamped, "%Y-%m-%dT%H:%M%:z").map_err(|source| {
            CollectorError::Parse {
                input: input.to_string(),
                source: Some(source),
            }
        })
    }

    /// Checks the fixed-width `YYYY-MM-DDTHH:MM` shape: digits everywhere
    /// except the separators at their exact positions.
    fn matches_pattern(input: &str) -> bool {
        let bytes = input.as_bytes();
        if bytes.len() != 16 {
            return false;
        }
        bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b'T',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
    }

    /// Renders an offset in seconds as a zone suffix, e.g. `+02:00` or `-05:00`.
    fn offset_suffix(utc_offset_seconds: i32) -> String {
        // Integer division truncates toward zero, which is exactly the
        // documented whole-hour precision limitation.
        let hours = utc_offset_seconds / 3600;
        let sign = if hours < 0 { '-' } else { '+' };
        format!("{}{:02}:00", sign, hours.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    #[test]
    fn builds_instant_at_utc() {
        let instant = TimeWindowBuilder::build("2023-10-01T12:05", 0).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 10, 1, 12, 5, 0).unwrap()
        );
    }

    #[test]
    fn positive_offset_shifts_instant_back() {
        // 12:00 local at +02:00 is 10:00 UTC.
        let instant = TimeWindowBuilder::build("2023-10-01T12:00", 2 * 3600).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 10, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn negative_offset_shifts_instant_forward() {
        // 12:00 local at -05:00 is 17:00 UTC.
        let instant = TimeWindowBuilder::build("2023-10-01T12:00", -5 * 3600).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 10, 1, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn sub_hour_offsets_truncate_toward_zero() {
        let whole = TimeWindowBuilder::build("2023-10-01T12:00", 5 * 3600).unwrap();
        let half = TimeWindowBuilder::build("2023-10-01T12:00", 5 * 3600 + 1800).unwrap();
        assert_eq!(whole, half);

        let neg_whole = TimeWindowBuilder::build("2023-10-01T12:00", -5 * 3600).unwrap();
        let neg_half = TimeWindowBuilder::build("2023-10-01T12:00", -(5 * 3600 + 1800)).unwrap();
        assert_eq!(neg_whole, neg_half);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let trimmed = TimeWindowBuilder::build("  2023-10-01T12:00 ", 0).unwrap();
        let bare = TimeWindowBuilder::build("2023-10-01T12:00", 0).unwrap();
        assert_eq!(trimmed, bare);
    }

    #[test]
    fn rejects_malformed_input() {
        let err = TimeWindowBuilder::build("not-a-date", 0).unwrap_err();
        assert!(matches!(err, CollectorError::Parse { .. }));
    }

    #[test]
    fn rejects_flexible_width_numerics() {
        // These would parse under chrono's lenient numeric handling but do
        // not match the fixed-width pattern.
        for input in ["2023-1-1T2:5", "2023-1-01T12:00", "2023-10-01T2:05"] {
            let err = TimeWindowBuilder::build(input, 0).unwrap_err();
            assert!(matches!(err, CollectorError::Parse { .. }), "{input}");
        }
    }

    #[test]
    fn rejects_wrong_separators_and_trailing_garbage() {
        for input in [
            "2023-10-01 12:00",
            "2023/10/01T12:00",
            "2023-10-01T12:00:00",
            "2023-10-01T12:00Z",
        ] {
            let err = TimeWindowBuilder::build(input, 0).unwrap_err();
            assert!(matches!(err, CollectorError::Parse { .. }), "{input}");
        }
    }

    #[test]
    fn rejects_impossible_date() {
        let err = TimeWindowBuilder::build("2023-02-30T12:00", 0).unwrap_err();
        assert!(matches!(err, CollectorError::Parse { .. }));
    }

    proptest! {
        /// For any whole-hour offset a real host could report, the parsed
        /// instant is the local wall-clock reading shifted by exactly that
        /// offset.
        #[test]
        fn offset_and_instant_agree(hours in -12i32..=14, sub_hour in 0i32..3600) {
            let offset_seconds = hours * 3600 + hours.signum() * sub_hour;
            let instant = TimeWindowBuilder::build("2023-06-15T06:30", offset_seconds).unwrap();

            let expected_utc = Utc.with_ymd_and_hms(2023, 6, 15, 6, 30, 0).unwrap()
                - chrono::Duration::hours(i64::from(hours));
            prop_assert_eq!(instant.with_timezone(&Utc), expected_utc);
        }
    }
}
