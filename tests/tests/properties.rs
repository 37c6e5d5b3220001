//! Whole-engine properties: idempotence, order preservation, and monotonic widening of ranges.

mod common;

use anyhow::Result;
use common::{collection, listing, mls_numbers};
use larentals_core::predicate::Range;
use larentals_core::{filter_listings, Category, Criterion, FilterSpec, LeaseFilters};
use serde_json::{json, Value};

fn sample() -> Value {
    let prices = [json!(1800), json!("2,250"), json!(null), json!(3200), json!("<NA>"), json!(0), json!(4100.5), json!("NaN")];
    collection(prices.into_iter().enumerate().map(|(i, price)| {
        let sqft = if i % 3 == 0 { json!(null) } else { json!(400 + 150 * i) };
        listing(&format!("L{i}"), [-118.2 - 0.01 * i as f64, 34.0 + 0.01 * i as f64], json!({ "list_price": price, "sqft": sqft }))
    }))
}

#[test]
fn test_filtering_is_idempotent() -> Result<()> {
    let filters = LeaseFilters::from_json(r#"{ "price": [1000, 3500], "sqft": [500, 1500], "sqftIncludeMissing": true }"#)?;
    let spec = filters.to_spec()?;

    let input = sample();
    let once = filter_listings(&input, &spec).to_value();
    let twice = filter_listings(&once, &spec).to_value();
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_result_preserves_input_order() -> Result<()> {
    let input = sample();
    let spec = FilterSpec::new(Category::Lease).with(Criterion::range("sqft", Range::unbounded(), true));
    let kept = mls_numbers(&filter_listings(&input, &spec));
    assert_eq!(kept, (0..8).map(|i| format!("L{i}")).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_widening_a_range_never_drops_listings() -> Result<()> {
    let input = sample();
    let windows = [(2000.0, 2500.0), (1500.0, 3000.0), (0.0, 3500.0), (f64::NEG_INFINITY, f64::INFINITY)];

    let mut previous: Vec<String> = Vec::new();
    for (min, max) in windows {
        let spec = FilterSpec::new(Category::Lease).with(Criterion::required_range("list_price", Range::new(min, max)));
        let kept = mls_numbers(&filter_listings(&input, &spec));
        assert!(previous.iter().all(|mls| kept.contains(mls)), "{previous:?} not within {kept:?}");
        previous = kept;
    }
    // zero is a price; null, "<NA>" and "NaN" are not
    assert_eq!(previous, ["L0", "L1", "L3", "L5", "L6"]);
    Ok(())
}

#[test]
fn test_point_range_matches_exact_value() -> Result<()> {
    let input = sample();
    let spec = FilterSpec::new(Category::Lease).with(Criterion::required_range("list_price", Range::point(2250.0)));
    assert_eq!(mls_numbers(&filter_listings(&input, &spec)), ["L1"]);
    Ok(())
}

#[test]
fn test_spec_is_shareable_across_threads() -> Result<()> {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let spec = LeaseFilters::from_json(r#"{ "rentalTerms": ["12M"] }"#)?.to_spec()?;
    assert_send_sync(&spec);
    Ok(())
}
