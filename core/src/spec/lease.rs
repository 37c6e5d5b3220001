use super::{push_date, push_range, Category, Criterion, FilterSpec};
use crate::error::SpecError;
use crate::predicate::{BoundarySet, FlagRule, Range, TriState, Vocabulary};
use serde::{Deserialize, Serialize};

/// The rental filter panel.
///
/// Every control is optional; an absent control adds no criterion, so `LeaseFilters::default()`
/// admits every listing. Include-missing switches default to off, matching an unset switch in
/// the panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaseFilters {
    pub price: Option<Range>,
    pub bedrooms: Option<Range>,
    pub bathrooms: Option<Range>,
    pub pet_policy: TriState,
    pub sqft: Option<Range>,
    pub sqft_include_missing: bool,
    pub ppsqft: Option<Range>,
    pub ppsqft_include_missing: bool,
    pub parking_spaces: Option<Range>,
    pub parking_spaces_include_missing: bool,
    pub year_built: Option<Range>,
    pub year_built_include_missing: bool,
    pub rental_terms: Option<Vec<String>>,
    /// `None` when the panel only offers the "Unknown" pseudo-term for missing terms.
    pub terms_include_missing: Option<bool>,
    pub furnished: Option<Vec<String>>,
    pub security_deposit: Option<Range>,
    pub security_deposit_include_missing: bool,
    pub pet_deposit: Option<Range>,
    pub pet_deposit_include_missing: bool,
    pub key_deposit: Option<Range>,
    pub key_deposit_include_missing: bool,
    pub other_deposit: Option<Range>,
    pub other_deposit_include_missing: bool,
    pub laundry: Option<Vec<String>>,
    pub subtypes: Option<Vec<String>>,
    pub listed_date_start: Option<String>,
    pub listed_date_end: Option<String>,
    /// `None` leaves undated listings alone unless a date bound is set.
    pub listed_date_include_missing: Option<bool>,
    pub download_speed: Option<Range>,
    pub upload_speed: Option<Range>,
    pub speed_include_missing: bool,
    pub zip_boundary: Option<serde_json::Value>,
}

impl LeaseFilters {
    pub fn from_json(json: &str) -> Result<Self, SpecError> { Ok(serde_json::from_str(json)?) }

    pub fn to_spec(&self) -> Result<FilterSpec, SpecError> {
        let mut spec = FilterSpec::new(Category::Lease);

        push_range(&mut spec, "list_price", self.price, None)?;
        push_range(&mut spec, "bedrooms", self.bedrooms, None)?;
        push_range(&mut spec, "total_bathrooms", self.bathrooms, None)?;
        if self.pet_policy != TriState::Both {
            spec.push(Criterion::flag("pet_policy", self.pet_policy, FlagRule::PetsUnlessRefused));
        }
        push_range(&mut spec, "sqft", self.sqft, Some(self.sqft_include_missing))?;
        push_range(&mut spec, "ppsqft", self.ppsqft, Some(self.ppsqft_include_missing))?;
        push_range(&mut spec, "parking_spaces", self.parking_spaces, Some(self.parking_spaces_include_missing))?;
        push_range(&mut spec, "year_built", self.year_built, Some(self.year_built_include_missing))?;
        if let Some(terms) = &self.rental_terms {
            spec.push(Criterion::text("terms", terms.as_slice(), self.terms_include_missing)?);
        }
        if let Some(chosen) = &self.furnished {
            spec.push(Criterion::category("furnished", chosen.clone(), Vocabulary::Furnished));
        }
        push_range(&mut spec, "security_deposit", self.security_deposit, Some(self.security_deposit_include_missing))?;
        push_range(&mut spec, "pet_deposit", self.pet_deposit, Some(self.pet_deposit_include_missing))?;
        push_range(&mut spec, "key_deposit", self.key_deposit, Some(self.key_deposit_include_missing))?;
        push_range(&mut spec, "other_deposit", self.other_deposit, Some(self.other_deposit_include_missing))?;
        if let Some(chosen) = &self.laundry {
            spec.push(Criterion::category("laundry_category", chosen.clone(), Vocabulary::Exact));
        }
        if let Some(chosen) = &self.subtypes {
            spec.push(Criterion::category("subtype", chosen.clone(), Vocabulary::Exact));
        }
        push_date(
            &mut spec,
            "listed_date",
            self.listed_date_start.as_deref(),
            self.listed_date_end.as_deref(),
            self.listed_date_include_missing,
        )?;
        push_range(&mut spec, "best_dn", self.download_speed, Some(self.speed_include_missing))?;
        push_range(&mut spec, "best_up", self.upload_speed, Some(self.speed_include_missing))?;
        if let Some(payload) = &self.zip_boundary {
            let boundaries = BoundarySet::from_payload(payload);
            if boundaries.is_active() {
                spec.push(Criterion::Boundary(boundaries));
            }
        }

        Ok(spec)
    }
}
