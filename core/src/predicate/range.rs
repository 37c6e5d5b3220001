use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive numeric range from a slider.
///
/// Deserializes from `[min, max]` or from a single number, which some sliders send once the user
/// pins an exact value. A `null` bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self { Self { min, max } }

    pub fn point(value: f64) -> Self { Self { min: value, max: value } }

    pub fn unbounded() -> Self { Self { min: f64::NEG_INFINITY, max: f64::INFINITY } }

    pub fn is_inverted(&self) -> bool { self.min > self.max }

    pub fn includes(&self, value: Option<f64>, include_missing: bool) -> bool {
        range_includes(value, self.min, self.max, include_missing)
    }
}

impl Default for Range {
    fn default() -> Self { Self::unbounded() }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Pair([Option<f64>; 2]),
    Point(f64),
}

impl From<RangeRepr> for Range {
    fn from(repr: RangeRepr) -> Self {
        match repr {
            RangeRepr::Pair([min, max]) => Range::new(min.unwrap_or(f64::NEG_INFINITY), max.unwrap_or(f64::INFINITY)),
            RangeRepr::Point(value) => Range::point(value),
        }
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        let bound = |v: f64| v.is_finite().then_some(v);
        RangeRepr::Pair([bound(range.min), bound(range.max)])
    }
}

/// Inclusive range test for a numeric-or-missing value.
///
/// A missing value passes only when `include_missing` is set. `min == max` admits exactly that
/// value.
pub fn range_includes(value: Option<f64>, min: f64, max: f64, include_missing: bool) -> bool {
    match value {
        Some(v) if !v.is_nan() => min <= v && v <= max,
        _ => include_missing,
    }
}

/// Inclusive date range test. An absent bound leaves that side open.
pub fn date_includes(value: Option<NaiveDate>, start: Option<NaiveDate>, end: Option<NaiveDate>, include_missing: bool) -> bool {
    match value {
        Some(date) => start.map_or(true, |s| s <= date) && end.map_or(true, |e| date <= e),
        None => include_missing,
    }
}
