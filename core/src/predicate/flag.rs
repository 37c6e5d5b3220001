//! Yes / No / Both radio controls over a categorical property.

use serde::{Deserialize, Serialize};

/// Subtype code for mobile homes, the only for-sale listings that carry pet and senior flags.
pub const MOBILE_HOME: &str = "MH";

/// Values the lease feed uses for an explicit "no pets".
pub const PETS_REFUSED: &[&str] = &["No", "No, Size Limit"];

/// A radio control that sends `true`, `false` or `"Both"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "TriStateRepr", into = "TriStateRepr")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Both,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TriStateRepr {
    Flag(bool),
    Text(String),
}

impl TryFrom<TriStateRepr> for TriState {
    type Error = String;

    fn try_from(repr: TriStateRepr) -> Result<Self, Self::Error> {
        match repr {
            TriStateRepr::Flag(true) => Ok(TriState::Yes),
            TriStateRepr::Flag(false) => Ok(TriState::No),
            TriStateRepr::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "both" => Ok(TriState::Both),
                "true" | "yes" => Ok(TriState::Yes),
                "false" | "no" => Ok(TriState::No),
                _ => Err(format!("expected true, false or \"Both\", got {s:?}")),
            },
        }
    }
}

impl From<TriState> for TriStateRepr {
    fn from(state: TriState) -> Self {
        match state {
            TriState::Yes => TriStateRepr::Flag(true),
            TriState::No => TriStateRepr::Flag(false),
            TriState::Both => TriStateRepr::Text("Both".to_string()),
        }
    }
}

/// How a Yes/No choice reads the listing's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRule {
    /// Rentals: pets are allowed unless the listing explicitly refuses them ([`PETS_REFUSED`]).
    PetsUnlessRefused,
    /// Mobile homes for sale: pets must be stated; any value mentioning `No` is a refusal.
    PetsStated,
    /// Mobile homes for sale: senior community flag, `Y…` or `N…`.
    SeniorCommunity,
}

impl FlagRule {
    /// Listing subtype the rule is limited to; listings of any other subtype are not constrained.
    pub fn subtype(&self) -> Option<&'static str> {
        match self {
            FlagRule::PetsUnlessRefused => None,
            FlagRule::PetsStated | FlagRule::SeniorCommunity => Some(MOBILE_HOME),
        }
    }

    /// Whether a listing of `subtype` is subject to the rule at all.
    pub fn applies_to(&self, subtype: Option<&str>) -> bool {
        match self.subtype() {
            None => true,
            Some(limited) => subtype.is_some_and(|s| s.eq_ignore_ascii_case(limited)),
        }
    }
}

/// Evaluates a radio choice against an already-normalized value (`None` = missing).
pub fn flag_matches(value: Option<&str>, choice: TriState, rule: FlagRule) -> bool {
    let wants_yes = match choice {
        TriState::Both => return true,
        TriState::Yes => true,
        TriState::No => false,
    };

    match rule {
        FlagRule::PetsUnlessRefused => {
            let refused = value.is_some_and(|v| PETS_REFUSED.contains(&v));
            wants_yes != refused
        }
        FlagRule::PetsStated => match value {
            Some(v) => wants_yes != v.contains("No"),
            None => false,
        },
        FlagRule::SeniorCommunity => match value {
            Some(v) if wants_yes => v.contains('Y'),
            Some(v) => v.contains('N'),
            None => false,
        },
    }
}
