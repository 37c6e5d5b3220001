//! Evaluation of a [`FilterSpec`] over a GeoJSON FeatureCollection.
//!
//! Filtering never fails and never mutates its input: features are borrowed from the collection
//! and the kept ones are returned in their original order.

use crate::error::SpecError;
use crate::listing::Filterable;
use crate::spec::{BuyFilters, Criterion, FilterSpec, LeaseFilters};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Result of evaluating one listing: kept, or skipped by the first criterion that rejected it.
#[derive(Debug, Clone)]
pub enum FilterResult<'s, R> {
    Pass(R),
    Skip(R, &'s Criterion),
}

/// Lazily evaluates a specification over an iterator of listings.
pub struct FilterIterator<'s, I> {
    iter: I,
    spec: &'s FilterSpec,
}

impl<'s, I, R> FilterIterator<'s, I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    pub fn new(iter: I, spec: &'s FilterSpec) -> Self { Self { iter, spec } }
}

impl<'s, I, R> Iterator for FilterIterator<'s, I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    type Item = FilterResult<'s, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.iter.next().map(|item| match spec.first_failure(&item) {
            None => FilterResult::Pass(item),
            Some(criterion) => FilterResult::Skip(item, criterion),
        })
    }
}

/// Filtered listings, borrowed from the input collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection<'a> {
    features: Vec<&'a Value>,
}

impl<'a> FeatureCollection<'a> {
    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &'a Value> + '_ { self.features.iter().copied() }

    pub fn features(&self) -> &[&'a Value] { &self.features }

    /// Owned GeoJSON copy of the result.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "type": "FeatureCollection",
            "features": self.features.iter().map(|feature| (*feature).clone()).collect::<Vec<_>>(),
        })
    }
}

impl Serialize for FeatureCollection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FeatureCollection", 2)?;
        state.serialize_field("type", "FeatureCollection")?;
        state.serialize_field("features", &self.features)?;
        state.end()
    }
}

/// Why a listing was left out of a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exclusion {
    /// Position of the feature in the input collection.
    pub index: usize,
    pub mls_number: Option<String>,
    /// Label of the first criterion the listing failed.
    pub criterion: String,
}

fn features_of(collection: &Value) -> Option<&[Value]> { collection.get("features")?.as_array().map(Vec::as_slice) }

/// Keeps the features of `collection` that pass every criterion of `spec`.
///
/// A collection that is not an object with a `features` array yields an empty result.
pub fn filter_listings<'a>(collection: &'a Value, spec: &FilterSpec) -> FeatureCollection<'a> {
    let Some(features) = features_of(collection) else {
        warn!("filter_listings: input is not a FeatureCollection, returning no listings");
        return FeatureCollection::default();
    };

    let mut kept = Vec::with_capacity(features.len());
    for result in FilterIterator::new(features.iter(), spec) {
        match result {
            FilterResult::Pass(feature) => kept.push(feature),
            FilterResult::Skip(feature, criterion) => {
                trace!(mls_number = ?feature.mls_number(), criterion = criterion.label(), "listing excluded");
            }
        }
    }

    debug!(kept = kept.len(), total = features.len(), category = %spec.category(), "filter_listings");
    FeatureCollection { features: kept }
}

/// Reports every excluded listing together with the first criterion it failed.
pub fn explain(collection: &Value, spec: &FilterSpec) -> Vec<Exclusion> {
    let Some(features) = features_of(collection) else { return Vec::new() };
    FilterIterator::new(features.iter(), spec)
        .enumerate()
        .filter_map(|(index, result)| match result {
            FilterResult::Pass(_) => None,
            FilterResult::Skip(feature, criterion) => {
                Some(Exclusion { index, mls_number: feature.mls_number(), criterion: criterion.label().to_string() })
            }
        })
        .collect()
}

pub fn filter_lease<'a>(collection: &'a Value, filters: &LeaseFilters) -> Result<FeatureCollection<'a>, SpecError> {
    Ok(filter_listings(collection, &filters.to_spec()?))
}

pub fn filter_buy<'a>(collection: &'a Value, filters: &BuyFilters) -> Result<FeatureCollection<'a>, SpecError> {
    Ok(filter_listings(collection, &filters.to_spec()?))
}
