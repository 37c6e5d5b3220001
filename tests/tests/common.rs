use serde_json::{json, Value};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init(); }

/// A point listing in `[longitude, latitude]` order.
#[allow(unused)]
pub fn listing(mls_number: &str, coordinates: [f64; 2], properties: Value) -> Value {
    let mut properties = properties;
    if let Some(map) = properties.as_object_mut() {
        map.insert("mls_number".to_string(), json!(mls_number));
    }
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": coordinates },
        "properties": properties
    })
}

#[allow(unused)]
pub fn collection(features: impl IntoIterator<Item = Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features.into_iter().collect::<Vec<_>>() })
}

/// MLS numbers of the features in a filtered result, in result order.
#[allow(unused)]
pub fn mls_numbers(result: &larentals_core::FeatureCollection<'_>) -> Vec<String> {
    use larentals_core::Filterable;
    result.iter().filter_map(|feature| feature.mls_number()).collect()
}

/// Echo Park, roughly: a square around 34.08N 118.26W.
#[allow(unused)]
pub fn echo_park() -> Value {
    json!({
        "type": "Feature",
        "properties": { "ZCTA5CE20": "90026" },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-118.28, 34.06], [-118.24, 34.06], [-118.24, 34.10], [-118.28, 34.10], [-118.28, 34.06]]]
        }
    })
}

/// Silver Lake, sharing Echo Park's western edge.
#[allow(unused)]
pub fn silver_lake() -> Value {
    json!({
        "type": "Feature",
        "properties": { "ZCTA5CE20": "90039" },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-118.32, 34.06], [-118.28, 34.06], [-118.28, 34.10], [-118.32, 34.10], [-118.32, 34.06]]]
        }
    })
}
