//! The two halves of a parsed age expression.
//!
//! Years, months and days vary in length and are subtracted on the wall
//! clock of the reference zone ([`CalendarOffset`]). Everything else is a
//! fixed-length span ([`ClockOffset`]).

use chrono::{Days, Months, NaiveDateTime, TimeDelta};
use serde::{Serialize, Serializer};

use crate::error::{ParseError, Result};
use crate::fixed::parse_fixed_duration;

/// Accumulated calendar-relative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarOffset {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl CalendarOffset {
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Subtract years, then months, then days from a wall-clock datetime.
    ///
    /// Month steps clamp the day-of-month to the last day of the target
    /// month (March 31 minus one month is February 28 or 29). Returns `None`
    /// if a count is negative or the result leaves chrono's supported range.
    pub fn subtract_from(&self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        let after_years = sub_months(local, self.years.checked_mul(12)?)?;
        let after_months = sub_months(after_years, self.months)?;
        sub_days(after_months, self.days)
    }
}

fn sub_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let months = u32::try_from(months).ok()?;
    dt.checked_sub_months(Months::new(months))
}

fn sub_days(dt: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let days = u64::try_from(days).ok()?;
    dt.checked_sub_days(Days::new(days))
}

/// The fixed-length part of an expression, kept together with the text it
/// was rebuilt from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockOffset {
    /// Non-calendar tokens in input order, e.g. `"20h5m"`.
    pub text: String,
    /// The signed offset to add to the reference instant (always `<= 0`).
    #[serde(rename = "seconds", serialize_with = "serialize_seconds")]
    pub delta: TimeDelta,
}

impl ClockOffset {
    /// Negate `text` and parse it with the fixed-duration grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFixedDuration`] naming `text` if the
    /// grammar rejects it.
    pub fn parse(text: String) -> Result<Self> {
        match parse_fixed_duration(&format!("-{text}")) {
            Ok(delta) => Ok(Self { text, delta }),
            Err(reason) => Err(ParseError::InvalidFixedDuration {
                expression: text,
                reason,
            }),
        }
    }
}

fn serialize_seconds<S: Serializer>(
    delta: &TimeDelta,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    serializer.serialize_f64(seconds)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn offset(years: i64, months: i64, days: i64) -> CalendarOffset {
        CalendarOffset {
            years,
            months,
            days,
        }
    }

    // ── CalendarOffset ──────────────────────────────────────────────────

    #[test]
    fn test_zero_offset_is_identity() {
        let dt = local(2024, 5, 17);
        assert!(CalendarOffset::default().is_zero());
        assert_eq!(CalendarOffset::default().subtract_from(dt), Some(dt));
    }

    #[test]
    fn test_month_clamps_to_end_of_february() {
        assert_eq!(
            offset(0, 1, 0).subtract_from(local(2024, 3, 31)),
            Some(local(2024, 2, 29))
        );
        assert_eq!(
            offset(0, 1, 0).subtract_from(local(2023, 3, 31)),
            Some(local(2023, 2, 28))
        );
    }

    #[test]
    fn test_year_from_leap_day() {
        assert_eq!(
            offset(1, 0, 0).subtract_from(local(2024, 2, 29)),
            Some(local(2023, 2, 28))
        );
    }

    #[test]
    fn test_years_then_months_then_days() {
        // 2024-02-29 -1y -> 2023-02-28 -1M -> 2023-01-28 -1d -> 2023-01-27.
        // Subtracting 13 months in one step would land on 2023-01-29.
        assert_eq!(
            offset(1, 1, 1).subtract_from(local(2024, 2, 29)),
            Some(local(2023, 1, 27))
        );
    }

    #[test]
    fn test_days_cross_month_boundary() {
        assert_eq!(
            offset(0, 0, 3).subtract_from(local(2024, 3, 1)),
            Some(local(2024, 2, 27))
        );
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(offset(i64::MAX, 0, 0).subtract_from(local(2024, 1, 1)), None);
        assert_eq!(offset(0, 0, i64::MAX).subtract_from(local(2024, 1, 1)), None);
        assert_eq!(offset(500_000, 0, 0).subtract_from(local(2024, 1, 1)), None);
    }

    // ── ClockOffset ─────────────────────────────────────────────────────

    #[test]
    fn test_clock_offset_is_negated() {
        let clock = ClockOffset::parse("20h5m".to_string()).unwrap();
        assert_eq!(clock.text, "20h5m");
        assert_eq!(clock.delta, -(TimeDelta::hours(20) + TimeDelta::minutes(5)));
    }

    #[test]
    fn test_clock_offset_error_names_text() {
        let err = ClockOffset::parse("1x".to_string()).unwrap_err();
        match err {
            ParseError::InvalidFixedDuration { expression, .. } => assert_eq!(expression, "1x"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
