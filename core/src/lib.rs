//! Client-side filtering for the LA rentals and for-sale listing maps.
//!
//! The host hands over the GeoJSON FeatureCollection it already has in memory together with the
//! current filter-panel controls; [`engine::filter_listings`] returns the listings that pass every
//! active criterion, in their original order.

pub mod engine;
pub mod error;
pub mod listing;
pub mod predicate;
pub mod spec;
pub mod value;

pub use engine::{explain, filter_buy, filter_lease, filter_listings, Exclusion, FeatureCollection};
pub use error::{BoundaryError, SpecError};
pub use listing::Filterable;
pub use spec::{BuyFilters, Category, Criterion, FilterSpec, LeaseFilters};
