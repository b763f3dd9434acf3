//! Duration values in simple style: `500ms`, `10s`, `2m`, or a bare number of milliseconds

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Parse a duration such as `250ms`, `30s`, `1h` or `1500`
///
/// A bare number is read as milliseconds. Supported units are
/// `ns`, `us`, `ms`, `s`, `m`, `h` and `d`.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty duration".to_string());
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err("expected a number".to_string());
    }
    let amount: u64 = digits
        .parse()
        .map_err(|e| format!("invalid number: {}", e))?;

    let duration = match unit.trim().to_lowercase().as_str() {
        "" | "ms" => Duration::from_millis(amount),
        "ns" => Duration::from_nanos(amount),
        "us" => Duration::from_micros(amount),
        "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(checked_mul(amount, 60)?),
        "h" => Duration::from_secs(checked_mul(amount, 3_600)?),
        "d" => Duration::from_secs(checked_mul(amount, 86_400)?),
        other => return Err(format!("unknown unit '{}'", other)),
    };
    Ok(duration)
}

/// Sub-second units, coarsest first, as (nanoseconds per unit, suffix)
const SUBSEC_UNITS: [(u32, &str); 3] = [(1_000_000, "ms"), (1_000, "us"), (1, "ns")];

/// Format a duration using the coarsest unit that keeps it exact
///
/// The amount always fits in a `u64` so `parse_duration` reads it back.
/// Durations too long for an exact count lose their finest digits.
pub fn format_duration(duration: Duration) -> String {
    let subsec = duration.subsec_nanos();
    if subsec == 0 {
        return format!("{}s", duration.as_secs());
    }

    let total = duration.as_nanos();
    let in_unit = |nanos_per_unit: u32| u64::try_from(total / u128::from(nanos_per_unit)).ok();

    for (nanos_per_unit, unit) in SUBSEC_UNITS {
        if subsec % nanos_per_unit == 0 {
            if let Some(amount) = in_unit(nanos_per_unit) {
                return format!("{}{}", amount, unit);
            }
        }
    }
    for (nanos_per_unit, unit) in SUBSEC_UNITS.into_iter().rev() {
        if let Some(amount) = in_unit(nanos_per_unit) {
            return format!("{}{}", amount, unit);
        }
    }
    format!("{}s", duration.as_secs())
}

/// A duration as written in a properties document, before parsing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum DurationValue {
    Millis(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn parse(&self) -> Result<Duration, String> {
        match self {
            DurationValue::Millis(ms) => Ok(Duration::from_millis(*ms)),
            DurationValue::Text(text) => parse_duration(text),
        }
    }

    /// The value as written, for error reports
    pub(crate) fn raw(&self) -> String {
        match self {
            DurationValue::Millis(ms) => ms.to_string(),
            DurationValue::Text(text) => text.clone(),
        }
    }
}

fn checked_mul(amount: u64, factor: u64) -> Result<u64, String> {
    amount
        .checked_mul(factor)
        .ok_or_else(|| "duration overflows".to_string())
}

/// `#[serde(with = "...")]` adapter for `Option<Duration>` fields
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&format_duration(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Option::<DurationValue>::deserialize(deserializer)?
            .map(|value| value.parse())
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
