use super::{push_date, push_range, Category, Criterion, FilterSpec};
use crate::error::SpecError;
use crate::predicate::{BoundarySet, FlagRule, Range, TriState, Vocabulary, MOBILE_HOME};
use serde::{Deserialize, Serialize};

/// The for-sale filter panel. Same conventions as [`LeaseFilters`](super::LeaseFilters).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuyFilters {
    pub price: Option<Range>,
    pub bedrooms: Option<Range>,
    pub bathrooms: Option<Range>,
    pub sqft: Option<Range>,
    pub sqft_include_missing: bool,
    pub ppsqft: Option<Range>,
    pub ppsqft_include_missing: bool,
    pub lot_size: Option<Range>,
    pub lot_size_include_missing: bool,
    pub year_built: Option<Range>,
    pub year_built_include_missing: bool,
    pub subtypes: Option<Vec<String>>,
    pub listed_date_start: Option<String>,
    pub listed_date_end: Option<String>,
    /// `None` leaves undated listings alone unless a date bound is set.
    pub listed_date_include_missing: Option<bool>,
    pub hoa_fee: Option<Range>,
    pub hoa_fee_include_missing: bool,
    pub hoa_fee_frequency: Option<Vec<String>>,
    pub space_rent: Option<Range>,
    pub space_rent_include_missing: bool,
    pub pet_policy: TriState,
    pub senior_community: TriState,
    pub download_speed: Option<Range>,
    pub upload_speed: Option<Range>,
    pub speed_include_missing: bool,
    pub zip_boundary: Option<serde_json::Value>,
}

impl BuyFilters {
    pub fn from_json(json: &str) -> Result<Self, SpecError> { Ok(serde_json::from_str(json)?) }

    /// Whether the subtype checklist includes mobile homes. The pet and senior radios only show
    /// (and only constrain mobile-home listings) when it does.
    fn mobile_homes_selected(&self) -> bool {
        self.subtypes.as_ref().is_some_and(|subtypes| subtypes.iter().any(|s| s.trim().eq_ignore_ascii_case(MOBILE_HOME)))
    }

    pub fn to_spec(&self) -> Result<FilterSpec, SpecError> {
        let mut spec = FilterSpec::new(Category::Buy);

        push_range(&mut spec, "list_price", self.price, None)?;
        push_range(&mut spec, "bedrooms", self.bedrooms, None)?;
        push_range(&mut spec, "total_bathrooms", self.bathrooms, None)?;
        push_range(&mut spec, "sqft", self.sqft, Some(self.sqft_include_missing))?;
        push_range(&mut spec, "ppsqft", self.ppsqft, Some(self.ppsqft_include_missing))?;
        push_range(&mut spec, "lot_size", self.lot_size, Some(self.lot_size_include_missing))?;
        push_range(&mut spec, "year_built", self.year_built, Some(self.year_built_include_missing))?;
        if let Some(chosen) = &self.subtypes {
            spec.push(Criterion::category("subtype", chosen.clone(), Vocabulary::CaseInsensitive));
        }
        push_date(
            &mut spec,
            "listed_date",
            self.listed_date_start.as_deref(),
            self.listed_date_end.as_deref(),
            self.listed_date_include_missing,
        )?;
        push_range(&mut spec, "hoa_fee", self.hoa_fee, Some(self.hoa_fee_include_missing))?;
        if let Some(chosen) = &self.hoa_fee_frequency {
            spec.push(Criterion::category("hoa_fee_frequency", chosen.clone(), Vocabulary::HoaFrequency));
        }
        push_range(&mut spec, "space_rent", self.space_rent, Some(self.space_rent_include_missing))?;
        if self.mobile_homes_selected() {
            if self.pet_policy != TriState::Both {
                spec.push(Criterion::flag("pets_allowed", self.pet_policy, FlagRule::PetsStated));
            }
            if self.senior_community != TriState::Both {
                spec.push(Criterion::flag("senior_community", self.senior_community, FlagRule::SeniorCommunity));
            }
        }
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
