//! Human-friendly duration strings.
//!
//! Durations are written the way operators write them in YAML and environment
//! variables: one or more `<number><unit>` terms (`100ms`, `1m30s`, `1.5h`) with an
//! optional leading sign. Supported units are `ns`, `us` (or `µs`), `ms`, `s`, `m`
//! and `h`. A bare integer is read as nanoseconds.
//!
//! Values are carried as [`TimeDelta`] so that a negative threshold survives
//! parsing and can be rejected by validation instead of by the parser.

use chrono::TimeDelta;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

lazy_static! {
    static ref TERM: Regex =
        Regex::new(r"^([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)")
            .expect("duration term pattern is valid");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("duration {0:?} is too large")]
    Overflow(String),
}

/// Parses a duration string such as `"250ms"`, `"1m30s"` or `"-5s"`.
pub fn parse(input: &str) -> Result<TimeDelta, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let caps = TERM
            .captures(rest)
            .ok_or_else(|| DurationError::Invalid(input.to_string()))?;
        let unit = match &caps[2] {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SECOND,
            "m" => NANOS_PER_MINUTE,
            _ => NANOS_PER_HOUR,
        };
        total = term_nanos(&caps[1], unit)
            .and_then(|nanos| total.checked_add(nanos))
            .filter(|sum| *sum <= i64::MAX as i128)
            .ok_or_else(|| DurationError::Overflow(input.to_string()))?;
        rest = &rest[caps[0].len()..];
    }

    let nanos = if negative { -total } else { total };
    Ok(TimeDelta::nanoseconds(nanos as i64))
}

/// Nanoseconds contributed by one term; fractional digits past nanosecond
/// precision are truncated.
fn term_nanos(number: &str, unit: i128) -> Option<i128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(unit)?;

    let digits = &fraction[..fraction.len().min(18)];
    if !digits.is_empty() {
        let numerator: i128 = digits.parse().ok()?;
        let scale = 10i128.pow(digits.len() as u32);
        nanos = nanos.checked_add(numerator * unit / scale)?;
    }
    Some(nanos)
}

/// Formats a duration in its compact form, e.g. `100ms`, `1m30s` or `-5ms`.
pub fn format(value: &TimeDelta) -> String {
    let total = value.num_seconds() as i128 * NANOS_PER_SECOND + value.subsec_nanos() as i128;
    if total == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    let mut remaining = total.abs();
    for (unit, suffix) in [
        (NANOS_PER_HOUR, "h"),
        (NANOS_PER_MINUTE, "m"),
        (NANOS_PER_SECOND, "s"),
        (NANOS_PER_MILLI, "ms"),
        (NANOS_PER_MICRO, "us"),
        (1, "ns"),
    ] {
        let count = remaining / unit;
        if count > 0 {
            out.push_str(&count.to_string());
            out.push_str(suffix);
            remaining %= unit;
        }
    }
    out
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationValue {
    Nanos(i64),
    Text(String),
}

/// `serde(with)` adapter for [`TimeDelta`] fields.
pub fn serialize<S>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// `serde(with)` adapter for [`TimeDelta`] fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    match DurationValue::deserialize(deserializer)? {
        DurationValue::Nanos(n) => Ok(TimeDelta::nanoseconds(n)),
        DurationValue::Text(s) => parse(&s).map_err(serde::de::Error::custom),
    }
}
