//! # timeago
//!
//! Turn an age expression such as `"1d20h5m"` or `"2y3M"` into the instant
//! that lies that far before a reference "now".
//!
//! Years (`y`), months (`M`) and days (`d`) are calendar-relative and are
//! subtracted on the wall clock of the reference zone. Every other unit is
//! handed to a fixed-length duration grammar (`h`, `m`, `s`, `ms`, `us`,
//! `ns`). Units are case-sensitive: `M` is months, `m` is minutes.
//!
//! ## Modules
//!
//! - [`expression`] — token scanning and applying a parsed expression
//! - [`offset`] — calendar and clock halves of an expression
//! - [`fixed`] — fixed-length duration grammar
//! - [`window`] — min-age / max-age bounds and age ordering
//! - [`error`] — Error types
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2023, 1, 10, 0, 0, 0).unwrap();
//! let then = timeago::parse_relative("1y2M3d", &now).unwrap();
//! assert_eq!(then, Utc.with_ymd_and_hms(2021, 11, 7, 0, 0, 0).unwrap());
//! ```

pub mod error;
pub mod expression;
pub mod fixed;
pub mod offset;
pub mod window;

use chrono::{DateTime, TimeZone, Utc};

pub use error::{FixedDurationError, ParseError, Result, WindowError};
pub use expression::DurationExpression;
pub use fixed::parse_fixed_duration;
pub use offset::{CalendarOffset, ClockOffset};
pub use window::{sort_by_age, AgeBounds, AgeWindow, SortOrder};

/// Subtract the age expression from `now`.
///
/// Empty input, or input with no `<digits><letter>` token, returns `now`
/// unchanged.
///
/// # Errors
///
/// See [`DurationExpression::parse`] and [`DurationExpression::apply`].
pub fn parse_relative<Tz: TimeZone>(
    expression: &str,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    DurationExpression::parse(expression)?.apply(now)
}

/// [`parse_relative`] against the current UTC time, sampled once.
pub fn parse(expression: &str) -> Result<DateTime<Utc>> {
    parse_relative(expression, &Utc::now())
}
