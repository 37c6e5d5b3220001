//! Read access to listings.
//!
//! The engine never owns or mutates a listing. Anything that can answer "what is property X" and
//! "where is it" can be filtered; the usual case is a GeoJSON Feature held as a
//! `serde_json::Value`.

use crate::value;
use chrono::NaiveDate;
use geo::Coord;
use serde_json::Value;

/// Trait for listings that can be evaluated against a [`FilterSpec`](crate::spec::FilterSpec).
pub trait Filterable {
    /// Raw value of a listing property, `None` when the property is absent.
    fn value(&self, name: &str) -> Option<&Value>;

    /// Raw GeoJSON position of the listing's point geometry.
    fn coordinates(&self) -> Option<&Value>;

    fn number(&self, name: &str) -> Option<f64> { self.value(name).and_then(value::number) }

    fn text(&self, name: &str) -> Option<&str> { self.value(name).and_then(value::text) }

    fn date(&self, name: &str) -> Option<NaiveDate> { self.value(name).and_then(value::date) }

    /// The listing's position as `(longitude, latitude)`, whatever order the feed used.
    fn point(&self) -> Option<Coord<f64>> { self.coordinates().and_then(value::normalize_coordinate_pair) }

    /// Identifier used when reporting why a listing was excluded.
    fn mls_number(&self) -> Option<String> {
        match self.value("mls_number")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A GeoJSON Feature: `{"geometry": {"coordinates": [..]}, "properties": {..}}`.
impl Filterable for Value {
    fn value(&self, name: &str) -> Option<&Value> { self.get("properties")?.get(name) }

    fn coordinates(&self) -> Option<&Value> { self.get("geometry")?.get("coordinates") }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn value(&self, name: &str) -> Option<&Value> { (**self).value(name) }

    fn coordinates(&self) -> Option<&Value> { (**self).coordinates() }
}
