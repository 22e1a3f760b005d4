//! Scanning an age expression into calendar and clock parts, and applying
//! the result to a reference instant.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::offset::{CalendarOffset, ClockOffset};

/// `<ascii digits><one letter>`. Anything between matches is ignored.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)(\p{L})").expect("token pattern is a valid regex")
});

/// A decomposed age expression such as `"1y2M3d4h"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DurationExpression {
    pub calendar: CalendarOffset,
    pub clock: Option<ClockOffset>,
}

impl DurationExpression {
    /// Scan `expression` for `<digits><letter>` tokens.
    ///
    /// `y`, `M` and `d` accumulate into [`CalendarOffset`]; every other
    /// token is appended, in input order, to the clock text and validated
    /// by the fixed-duration grammar. Text that does not form a token is
    /// skipped.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidAmount`] if a digit run, or the running total
    ///   for a calendar unit, does not fit in an `i64`.
    /// - [`ParseError::InvalidFixedDuration`] if the clock text is rejected.
    pub fn parse(expression: &str) -> Result<Self> {
        let mut calendar = CalendarOffset::default();
        let mut clock_text = String::new();

        for caps in TOKEN.captures_iter(expression) {
            let token = &caps[0];
            let unit = &caps[2];
            let amount: i64 = caps[1]
                .parse()
                .map_err(|e: std::num::ParseIntError| ParseError::InvalidAmount {
                    token: token.to_string(),
                    reason: e.to_string(),
                })?;
            trace!(token, amount, unit, "scanned age token");

            let slot = match unit {
                "y" => &mut calendar.years,
                "M" => &mut calendar.months,
                "d" => &mut calendar.days,
                _ => {
                    clock_text.push_str(token);
                    continue;
                }
            };
            *slot = slot
                .checked_add(amount)
                .ok_or_else(|| ParseError::InvalidAmount {
                    token: token.to_string(),
                    reason: format!("accumulated {unit} count overflows"),
                })?;
        }

        let clock = if clock_text.is_empty() {
            None
        } else {
            Some(ClockOffset::parse(clock_text)?)
        };

        debug!(
            expression,
            years = calendar.years,
            months = calendar.months,
            days = calendar.days,
            clock = clock.as_ref().map(|c| c.text.as_str()),
            "parsed age expression"
        );

        Ok(Self { calendar, clock })
    }

    pub fn is_empty(&self) -> bool {
        self.calendar.is_zero() && self.clock.is_none()
    }

    /// Subtract this expression from `now`.
    ///
    /// The clock offset is applied first as an absolute shift. Years, months
    /// and days are then subtracted on the wall clock of `now`'s zone. A
    /// wall-clock result that falls in a DST fold resolves to the earlier
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OutOfRange`] if the result cannot be
    /// represented, or if it lands in a DST gap of `now`'s zone.
    pub fn apply<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let shifted = match &self.clock {
            Some(clock) => now.clone().checked_add_signed(clock.delta).ok_or_else(|| {
                ParseError::OutOfRange(format!(
                    "cannot subtract '{}' from the reference instant",
                    clock.text
                ))
            })?,
            None => now.clone(),
        };

        if self.calendar.is_zero() {
            return Ok(shifted);
        }

        let cal = self.calendar;
        let target = cal.subtract_from(shifted.naive_local()).ok_or_else(|| {
            ParseError::OutOfRange(format!(
                "cannot subtract {}y{}M{}d from the reference instant",
                cal.years, cal.months, cal.days
            ))
        })?;

        shifted
            .timezone()
            .from_local_datetime(&target)
            .earliest()
            .ok_or_else(|| {
                ParseError::OutOfRange(format!(
                    "local time {target} does not exist in the reference time zone"
                ))
            })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
