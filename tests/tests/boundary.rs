mod common;

use anyhow::Result;
use common::{collection, echo_park, listing, mls_numbers, silver_lake};
use larentals_core::{filter_lease, LeaseFilters};
use serde_json::{json, Value};

fn neighborhood() -> Value {
    collection([
        // inside Echo Park
        listing("E1", [-118.26, 34.08], json!({ "list_price": 2500 })),
        // inside Echo Park, feed wrote latitude first
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [34.07, -118.25] },
            "properties": { "mls_number": "E2", "list_price": 2700 }
        }),
        // on the shared edge between the two ZIPs
        listing("EDGE", [-118.28, 34.08], json!({ "list_price": 2900 })),
        // inside Silver Lake
        listing("S1", [-118.30, 34.09], json!({ "list_price": 3100 })),
        // no usable coordinates
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [34.07, 34.07] },
            "properties": { "mls_number": "BAD", "list_price": 2000 }
        }),
        json!({ "type": "Feature", "geometry": null, "properties": { "mls_number": "NOGEO", "list_price": 2000 } }),
    ])
}

fn run(zip_boundary: Value) -> Result<Vec<String>> {
    let filters = LeaseFilters { zip_boundary: Some(zip_boundary), ..Default::default() };
    let input = neighborhood();
    Ok(mls_numbers(&filter_lease(&input, &filters)?))
}

#[test]
fn test_single_zip() -> Result<()> {
    assert_eq!(run(json!({ "zip_code": "90026", "feature": echo_park() }))?, ["E1", "E2", "EDGE"]);
    assert_eq!(run(json!({ "zip_code": "90039", "feature": silver_lake() }))?, ["EDGE", "S1"]);
    Ok(())
}

#[test]
fn test_any_of_several_zips() -> Result<()> {
    let payload = json!({ "zip_codes": ["90026", "90039"], "features": [echo_park(), silver_lake()] });
    assert_eq!(run(payload)?, ["E1", "E2", "EDGE", "S1"]);

    let bare = json!({ "type": "FeatureCollection", "features": [silver_lake()] });
    assert_eq!(run(bare)?, ["EDGE", "S1"]);
    Ok(())
}

#[test]
fn test_no_boundary_is_no_constraint() -> Result<()> {
    assert_eq!(run(json!({}))?, ["E1", "E2", "EDGE", "S1", "BAD", "NOGEO"]);
    assert_eq!(run(json!(null))?, ["E1", "E2", "EDGE", "S1", "BAD", "NOGEO"]);
    Ok(())
}

#[test]
fn test_requested_zip_without_polygon_excludes_everything() -> Result<()> {
    assert!(run(json!({ "zip_code": "90026" }))?.is_empty());
    assert!(run(json!({ "zip_codes": ["90026"], "features": [{ "type": "Feature", "geometry": null }] }))?.is_empty());
    Ok(())
}

#[test]
fn test_boundary_combines_with_other_controls() -> Result<()> {
    let filters: LeaseFilters = serde_json::from_value(json!({
        "price": [2600, 3000],
        "zipBoundary": { "zip_code": "90026", "feature": echo_park() }
    }))?;
    let input = neighborhood();
    assert_eq!(mls_numbers(&filter_lease(&input, &filters)?), ["E2", "EDGE"]);
    Ok(())
}
