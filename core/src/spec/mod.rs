//! Filter specifications: the full set of active criteria for one filtering pass.
//!
//! A specification is rebuilt from the filter panel on every change. The two listing categories
//! share the criterion types and differ only in which properties they bind; see [`LeaseFilters`]
//! and [`BuyFilters`] for the panel-to-criteria mapping.

mod buy;
mod criterion;
mod lease;

pub use buy::BuyFilters;
pub use criterion::Criterion;
pub use lease::LeaseFilters;

use crate::error::SpecError;
use crate::listing::Filterable;
use crate::predicate::Range;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which listing feed a specification was built for. Property names are not shared between the
/// two feeds, so a specification only makes sense against its own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lease,
    Buy,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Lease => write!(f, "lease"),
            Category::Buy => write!(f, "buy"),
        }
    }
}

/// Ordered set of criteria; a listing passes when every criterion passes.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    category: Category,
    criteria: Vec<Criterion>,
}

impl FilterSpec {
    pub fn new(category: Category) -> Self { Self { category, criteria: Vec::new() } }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: Criterion) { self.criteria.push(criterion); }

    pub fn category(&self) -> Category { self.category }

    pub fn criteria(&self) -> &[Criterion] { &self.criteria }

    pub fn is_empty(&self) -> bool { self.criteria.is_empty() }

    pub fn matches<F: Filterable + ?Sized>(&self, listing: &F) -> bool { self.criteria.iter().all(|c| c.evaluate(listing)) }

    /// The first criterion (in specification order) that rejects the listing.
    pub fn first_failure<F: Filterable + ?Sized>(&self, listing: &F) -> Option<&Criterion> {
        self.criteria.iter().find(|c| !c.evaluate(listing))
    }
}

/// Adds a range criterion unless the control is absent.
fn push_range(spec: &mut FilterSpec, field: &'static str, range: Option<Range>, include_missing: Option<bool>) -> Result<(), SpecError> {
    let Some(range) = range else { return Ok(()) };
    if range.is_inverted() {
        return Err(SpecError::InvalidRange { field, min: range.min, max: range.max });
    }
    spec.push(match include_missing {
        Some(include_missing) => Criterion::range(field, range, include_missing),
        None => Criterion::required_range(field, range),
    });
    Ok(())
}

/// Adds a listed-date criterion when either bound is set, or when the include-missing switch is
/// explicitly off: an unset date range still drops undated listings in that case.
fn push_date(
    spec: &mut FilterSpec,
    field: &'static str,
    start: Option<&str>,
    end: Option<&str>,
    include_missing: Option<bool>,
) -> Result<(), SpecError> {
    let start = parse_bound(field, start)?;
    let end = parse_bound(field, end)?;
    if start.is_some() || end.is_some() || include_missing == Some(false) {
        spec.push(Criterion::Date { property: field.to_string(), start, end, include_missing: include_missing.unwrap_or(false) });
    }
    Ok(())
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, SpecError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => crate::value::parse_date(raw).map(Some).ok_or_else(|| SpecError::InvalidDate { field, value: raw.to_string() }),
    }
}
