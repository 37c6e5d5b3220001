use super::UNKNOWN;
use crate::value;
use serde_json::Value;
use std::borrow::Cow;

/// Label the filter panel uses for furnished listings that are offered either way.
pub const FURNISHED_EITHER: &str = "Furnished Or Unfurnished";

/// Label the filter panel uses for listings without an HOA fee frequency.
pub const NOT_APPLICABLE: &str = "N/A";

/// How a raw listing value maps onto the checklist labels of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Labels are the raw values.
    Exact,
    /// Labels are the raw values, compared ignoring ASCII case (for-sale subtypes).
    CaseInsensitive,
    /// The feed's `"Both"` is shown as [`FURNISHED_EITHER`].
    Furnished,
    /// A missing frequency is shown as [`NOT_APPLICABLE`], which is an ordinary choice.
    HoaFrequency,
}

impl Vocabulary {
    /// Checklist label for a raw value; `None` when the listing has nothing to show.
    pub fn label<'a>(&self, raw: Option<&'a str>) -> Option<Cow<'a, str>> {
        match (self, raw) {
            (Vocabulary::Furnished, Some("Both")) => Some(Cow::Borrowed(FURNISHED_EITHER)),
            (Vocabulary::HoaFrequency, None) => Some(Cow::Borrowed(NOT_APPLICABLE)),
            (_, raw) => raw.map(Cow::Borrowed),
        }
    }

    fn same(&self, label: &str, chosen: &str) -> bool {
        match self {
            Vocabulary::CaseInsensitive => label.eq_ignore_ascii_case(chosen),
            _ => label == chosen,
        }
    }
}

/// Checklist membership for a categorical (possibly multi-valued) property.
///
/// * nothing chosen: nothing passes
/// * [`UNKNOWN`] chosen: a missing value passes
/// * otherwise any listing value, mapped through `vocabulary`, must equal a chosen label
pub fn set_includes<S: AsRef<str>>(value: Option<&Value>, chosen: &[S], vocabulary: Vocabulary) -> bool {
    if chosen.is_empty() {
        return false;
    }

    let unknown_chosen = chosen.iter().any(|c| c.as_ref() == UNKNOWN);
    if unknown_chosen && value::is_missing(value) {
        return true;
    }

    value::texts(value).into_iter().filter_map(|raw| vocabulary.label(raw)).any(|label| {
        chosen.iter().map(AsRef::as_ref).filter(|c| *c != UNKNOWN).any(|c| vocabulary.same(&label, c))
    })
}
