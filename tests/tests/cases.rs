//! Table-driven filter cases.
//!
//! Each case is a small set of labelled listings and a list of filter panels with the labels they
//! should keep. Cases are loaded from `tests/listing_cases.json`.

mod common;

use anyhow::Result;
use larentals_core::{filter_buy, filter_lease, BuyFilters, Category, LeaseFilters};
use serde::Deserialize;
use serde_json::{json, Value};

const LISTING_CASES_JSON: &str = include_str!("../listing_cases.json");

#[derive(Debug, Deserialize)]
struct ListingCases {
    suites: Vec<TestSuite>,
}
#[derive(Debug, Deserialize)]
struct TestSuite {
    name: String,
    category: Category,
    cases: Vec<TestCase>,
}
#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    listings: Vec<TestListing>,
    expectations: Vec<Expectation>,
}
#[derive(Debug, Deserialize)]
struct TestListing {
    label: String,
    #[serde(default)]
    coordinates: Option<Value>,
    properties: Value,
}
#[derive(Debug, Deserialize)]
struct Expectation {
    filters: Value,
    matches: Vec<String>,
}

fn load() -> Result<Vec<TestSuite>> {
    let cases: ListingCases = serde_json::from_str(LISTING_CASES_JSON)?;
    Ok(cases.suites)
}

fn feature_collection(listings: &[TestListing]) -> Value {
    let features: Vec<Value> = listings
        .iter()
        .map(|listing| {
            let mut properties = listing.properties.clone();
            if let Some(map) = properties.as_object_mut() {
                map.insert("mls_number".to_string(), json!(listing.label));
            }
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": listing.coordinates.clone().unwrap_or(json!([-118.25, 34.05])) },
                "properties": properties
            })
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
}

fn run(category: Category, filters: &Value, input: &Value) -> Result<Vec<String>> {
    let result = match category {
        Category::Lease => filter_lease(input, &serde_json::from_value::<LeaseFilters>(filters.clone())?)?,
        Category::Buy => filter_buy(input, &serde_json::from_value::<BuyFilters>(filters.clone())?)?,
    };
    Ok(common::mls_numbers(&result))
}

#[test]
fn test_listing_cases() -> Result<()> {
    let mut failures = Vec::new();
    let mut checked = 0;
    for suite in load()? {
        for case in &suite.cases {
            let input = feature_collection(&case.listings);
            for expectation in &case.expectations {
                checked += 1;
                let kept = run(suite.category, &expectation.filters, &input)?;
                if kept != expectation.matches {
                    failures.push(format!(
                        "{}/{}: filters {} kept {:?}, expected {:?}",
                        suite.name, case.name, expectation.filters, kept, expectation.matches
                    ));
                }
            }
        }
    }
    tracing::info!("checked {} listing expectations", checked);
    assert!(failures.is_empty(), "{} case(s) failed:\n{}", failures.len(), failures.join("\n"));
    Ok(())
}
