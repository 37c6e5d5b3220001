//! ZIP-boundary containment.
//!
//! Boundaries arrive from the host as GeoJSON (Census ZIP Code Tabulation Areas). A listing is kept
//! when its point falls in at least one boundary polygon. Points exactly on a polygon edge or
//! vertex count as inside, so a listing geocoded onto a shared ZIP border shows up for both ZIPs.

use crate::error::BoundaryError;
use crate::value;
use geo::{Coord, Intersects, LineString, Polygon};
use serde::Deserialize;
use serde_json::Value;

/// Selected boundaries for one filtering pass.
///
/// Active when the host supplied any polygon or requested any ZIP code. A requested ZIP without a
/// polygon keeps the criterion active with nothing to match, so every listing fails rather than
/// silently ignoring the request.
#[derive(Debug, Clone, Default)]
pub struct BoundarySet {
    zip_codes: Vec<String>,
    polygons: Vec<Polygon<f64>>,
}

impl BoundarySet {
    pub fn new(polygons: Vec<Polygon<f64>>) -> Self { Self { zip_codes: Vec::new(), polygons } }

    /// Reads the host's boundary payload. Accepted shapes (combinable):
    /// `{"zip_codes": [..]}`, `{"zip_code": ".."}`, `{"features": [..]}`, `{"feature": {..}}`, a
    /// bare Feature, or a bare geometry. Geometries that are not (Multi)Polygons are skipped.
    pub fn from_payload(payload: &Value) -> Self {
        let zip_codes = match (payload.get("zip_codes"), payload.get("zip_code")) {
            (Some(Value::Array(codes)), _) => codes.iter().filter_map(zip_code).collect(),
            (_, Some(code)) => zip_code(code).into_iter().collect(),
            _ => Vec::new(),
        };

        let features: Vec<&Value> = match (payload.get("features"), payload.get("feature")) {
            (Some(Value::Array(features)), _) => features.iter().collect(),
            (_, Some(feature)) if feature.is_object() => vec![feature],
            _ if payload.get("geometry").is_some() || payload.get("coordinates").is_some() => vec![payload],
            _ => Vec::new(),
        };

        let mut polygons = Vec::new();
        for feature in features {
            let geometry = feature.get("geometry").unwrap_or(feature);
            if geometry.is_null() {
                continue;
            }
            match polygons_from_geometry(geometry) {
                Ok(found) => polygons.extend(found),
                Err(e) => tracing::warn!("skipping boundary feature: {}", e),
            }
        }

        Self { zip_codes, polygons }
    }

    pub fn with_zip_codes(mut self, zip_codes: impl IntoIterator<Item = String>) -> Self {
        self.zip_codes.extend(zip_codes);
        self
    }

    pub fn is_active(&self) -> bool { !self.polygons.is_empty() || !self.zip_codes.is_empty() }

    pub fn zip_codes(&self) -> &[String] { &self.zip_codes }

    pub fn polygons(&self) -> &[Polygon<f64>] { &self.polygons }

    /// Containment test for a raw GeoJSON position. Inactive sets admit everything.
    pub fn contains(&self, coordinates: Option<&Value>) -> bool {
        if !self.is_active() {
            return true;
        }
        !self.polygons.is_empty() && within_any_boundary(coordinates, &self.polygons)
    }
}

fn zip_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Point-in-polygon test against any of `polygons`.
///
/// No polygons means no geographic constraint. With polygons, a listing without usable coordinates
/// (absent, ambiguous or impossible order) fails.
pub fn within_any_boundary(coordinates: Option<&Value>, polygons: &[Polygon<f64>]) -> bool {
    if polygons.is_empty() {
        return true;
    }
    match coordinates.and_then(value::normalize_coordinate_pair) {
        Some(point) => polygons.iter().any(|polygon| polygon.intersects(&point)),
        None => false,
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// Converts a GeoJSON Polygon or MultiPolygon geometry into polygons.
pub fn polygons_from_geometry(geometry: &Value) -> Result<Vec<Polygon<f64>>, BoundaryError> {
    let geometry = Geometry::deserialize(geometry).map_err(|e| BoundaryError::UnsupportedGeometry(e.to_string()))?;
    match geometry {
        Geometry::Polygon { coordinates } => Ok(vec![polygon(coordinates)?]),
        Geometry::MultiPolygon { coordinates } => coordinates.into_iter().map(polygon).collect(),
    }
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon<f64>, BoundaryError> {
    let mut rings = rings.into_iter().map(ring);
    let exterior = rings.next().ok_or(BoundaryError::InvalidPolygon("polygon has no rings"))??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn ring(positions: Vec<Vec<f64>>) -> Result<LineString<f64>, BoundaryError> {
    let coords = positions
        .into_iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
            _ => Err(BoundaryError::InvalidPolygon("position needs two finite numbers")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() < 3 {
        return Err(BoundaryError::InvalidPolygon("ring needs at least three positions"));
    }
    Ok(LineString::from(coords))
}
