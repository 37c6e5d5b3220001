//! Error types for building filter specifications.
//!
//! Evaluation itself is total: a malformed listing or collection is treated as missing data and
//! never produces an error. Only the controls coming from the filter panel can be rejected.

use thiserror::Error;

/// Error type for turning filter-panel controls into a [`FilterSpec`](crate::spec::FilterSpec).
#[derive(Debug, Error)]
pub enum SpecError {
    /// The filter controls could not be deserialized
    #[error("invalid filter controls: {0}")]
    Controls(#[from] serde_json::Error),

    /// A date bound was not a recognizable date
    #[error("invalid date for {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    /// A range whose lower bound exceeds its upper bound
    #[error("invalid range for {field}: [{min}, {max}]")]
    InvalidRange { field: &'static str, min: f64, max: f64 },

    /// The alternation built from the chosen terms could not be compiled (size limits)
    #[error("term pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Error type for boundary polygons supplied by the host.
#[derive(Debug, Error, PartialEq)]
pub enum BoundaryError {
    #[error("unsupported boundary geometry: {0}")]
    UnsupportedGeometry(String),
    #[error("invalid polygon: {0}")]
    InvalidPolygon(&'static str),
}

#[cfg(feature = "wasm")]
impl From<SpecError> for wasm_bindgen::JsValue {
    fn from(error: SpecError) -> Self { wasm_bindgen::JsValue::from_str(&error.to_string()) }
}
