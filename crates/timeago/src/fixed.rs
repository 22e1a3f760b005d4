//! Fixed-length duration grammar.
//!
//! Accepts a signed sequence of `<number><unit>` pairs such as `"1h30m"`,
//! `"-2.5s"` or `"300ms"`. Numbers may carry a fractional part. The bare
//! literal `"0"` is accepted without a unit.
//!
//! | Unit | Meaning |
//! |------|---------|
//! | `ns` | nanoseconds |
//! | `us`, `µs`, `μs` | microseconds |
//! | `ms` | milliseconds |
//! | `s` | seconds |
//! | `m` | minutes |
//! | `h` | hours |
//!
//! The magnitude is accumulated in nanoseconds and must fit in an `i64`
//! (roughly 292 years).

use chrono::TimeDelta;

use crate::error::FixedDurationError;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Fractional digits beyond this are dropped; they cannot move the result
/// by a whole nanosecond for any supported unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a fixed-length duration string into a [`TimeDelta`].
///
/// # Errors
///
/// Returns a [`FixedDurationError`] if the string is empty, a number is
/// malformed, a unit is missing or unknown, or the total overflows.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use timeago::fixed::parse_fixed_duration;
///
/// assert_eq!(parse_fixed_duration("1h30m").unwrap(), TimeDelta::minutes(90));
/// assert_eq!(parse_fixed_duration("-1.5s").unwrap(), TimeDelta::milliseconds(-1500));
/// ```
pub fn parse_fixed_duration(s: &str) -> Result<TimeDelta, FixedDurationError> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if body == "0" {
        return Ok(TimeDelta::zero());
    }
    if body.is_empty() {
        return Err(FixedDurationError::Empty);
    }

    let mut total: u64 = 0;
    let mut rest = body;

    while !rest.is_empty() {
        let (whole, fraction, after_number) = split_number(rest);
        if whole.is_empty() && fraction.is_empty() {
            return Err(FixedDurationError::InvalidNumber(s.to_string()));
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, after_unit) = after_number.split_at(unit_len);
        if unit.is_empty() {
            return Err(FixedDurationError::MissingUnit(s.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| FixedDurationError::UnknownUnit {
            unit: unit.to_string(),
            input: s.to_string(),
        })?;

        let overflow = || FixedDurationError::Overflow(s.to_string());

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut component = whole_value.checked_mul(scale).ok_or_else(overflow)?;
        component = component
            .checked_add(fraction_nanos(fraction, scale))
            .ok_or_else(overflow)?;
        total = total.checked_add(component).ok_or_else(overflow)?;

        rest = after_unit;
    }

    let signed = if negative {
        0i64.checked_sub_unsigned(total)
    } else {
        i64::try_from(total).ok()
    };
    signed
        .map(TimeDelta::nanoseconds)
        .ok_or_else(|| FixedDurationError::Overflow(s.to_string()))
}

/// Split a leading `digits? ("." digits?)?` off `s`, returning the integer
/// digits, the fraction digits and the remainder.
fn split_number(s: &str) -> (&str, &str, &str) {
    let whole_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let (whole, rest) = s.split_at(whole_len);
    match rest.strip_prefix('.') {
        Some(after_dot) => {
            let fraction_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            let (fraction, rest) = after_dot.split_at(fraction_len);
            (whole, fraction, rest)
        }
        None => (whole, "", rest),
    }
}

/// Nanoseconds contributed by the fractional digits of a number in `scale` units.
fn fraction_nanos(fraction: &str, scale: u64) -> u64 {
    let mut numerator: u64 = 0;
    let mut denominator: u64 = 1;
    for digit in fraction.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + u64::from(digit - b'0');
        denominator *= 10;
    }
    // u128 keeps `numerator * scale` exact for every supported unit.
    (u128::from(numerator) * u128::from(scale) / u128::from(denominator)) as u64
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
