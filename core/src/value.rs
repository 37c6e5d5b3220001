//! Normalization of the loosely-typed values found in listing properties.
//!
//! The listing feeds are assembled from several MLS exports and a dataframe pipeline, so the
//! same attribute can arrive as a JSON number, a string with thousands separators, `null`, or a
//! placeholder token such as `"<NA>"`. Everything here maps those encodings onto `Option`s so the
//! predicates only ever see "a value" or "missing".
//!
//! Missing means: absent, `null`, NaN/unparsable, or one of [`PLACEHOLDERS`] (including the empty
//! string). `0` is a value.

use chrono::{DateTime, NaiveDate};
use geo::Coord;
use serde_json::Value;

/// Tokens written by the data pipeline in place of an unknown value. Compared case-insensitively.
pub const PLACEHOLDERS: &[&str] = &["<NA>", "NaN", "None", "null", "undefined", "Unknown"];

/// True for the empty string, whitespace, and any of [`PLACEHOLDERS`].
pub fn is_placeholder(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || PLACEHOLDERS.iter().any(|p| raw.eq_ignore_ascii_case(p))
}

/// Canonical missing-value test for any property value.
///
/// Arrays are missing when every element is missing (so `[]` and `[null]` are missing).
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => is_placeholder(s),
        Some(Value::Array(items)) => items.iter().all(|item| is_missing(Some(item))),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| !f.is_finite()),
        Some(Value::Bool(_)) | Some(Value::Object(_)) => false,
    }
}

/// Reads a finite number, accepting numeric strings such as `"1,200"` or `" $2,500 "`.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parses a numeric string, ignoring currency symbols, thousands separators and whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    if is_placeholder(raw) {
        return None;
    }
    let cleaned: String = raw.chars().filter(|c| !matches!(c, ',' | '$' | '_') && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Reads a trimmed, non-placeholder string. Non-string values are not coerced.
pub fn text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !is_placeholder(s) => Some(s.trim()),
        _ => None,
    }
}

/// Every string carried by a property, flattening arrays one level. Missing entries are `None`;
/// a missing property yields a single `None` so callers always have at least one entry.
pub fn texts(value: Option<&Value>) -> Vec<Option<&str>> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => items.iter().map(text).collect(),
        Some(value) => vec![text(value)],
        None => vec![None],
    }
}

/// Reads a calendar date from `YYYY-MM-DD`, `YYYY-MM-DD[T ]hh:mm:ss…`, RFC 3339, or epoch
/// milliseconds (the encoding pandas uses when it writes dates as numbers).
pub fn date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?).map(|dt| dt.date_naive()),
        _ => None,
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if is_placeholder(raw) {
        return None;
    }
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let day = raw.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Normalizes a GeoJSON position to `(longitude, latitude)`.
///
/// Listing feeds disagree on coordinate order, so the order is detected by magnitude: exactly one
/// of the two values may be a valid latitude (`|v| <= 90`) and the other must be a longitude
/// outside that band (`90 < |v| <= 180`). Anything else is ambiguous or impossible and yields
/// `None`.
pub fn normalize_coordinate_pair(coordinates: &Value) -> Option<Coord<f64>> {
    let pair = coordinates.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    let (a, b) = (number(&pair[0])?, number(&pair[1])?);
    let is_lat = |v: f64| v.abs() <= 90.0;
    let is_lon_only = |v: f64| v.abs() > 90.0 && v.abs() <= 180.0;

    if is_lat(a) && is_lon_only(b) {
        Some(Coord { x: b, y: a })
    } else if is_lon_only(a) && is_lat(b) {
        Some(Coord { x: a, y: b })
    } else {
        None
    }
}
