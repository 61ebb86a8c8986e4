//! Coercions of loosely typed form values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns whether a value counts as absent: `null` or a blank string.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Returns the trimmed textual form of a value.
///
/// Whole-valued floats print without a fraction, as browsers render them.
#[must_use]
pub fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        other => other.to_string(),
    }
}

/// Returns the length of text in UTF-16 code units, as browsers count it.
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(raw) if number.is_f64() && raw == 0.0 => "0".to_owned(),
        Some(raw) if number.is_f64() && raw.fract() == 0.0 && raw.abs() < 1e21 => {
            format!("{raw:.0}")
        }
        _ => number.to_string(),
    }
}

/// Returns the numeric value of a number, boolean or numeric string.
///
/// Booleans count as `1` and `0`.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

/// Parses a value as a point in time.
///
/// Numbers are epoch milliseconds. Strings may be RFC 3339, a plain
/// `YYYY-MM-DD` date (midnight), or a date and time without offset.
#[must_use]
pub fn as_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|raw| raw.is_finite()).map(|raw| raw as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|timestamp| timestamp.naive_utc()),
        Value::String(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}
