use crate::listing::Filterable;
use crate::predicate::{date_includes, flag_matches, set_includes, BoundarySet, FlagRule, Range, TermPattern, TriState, Vocabulary};
use chrono::NaiveDate;

/// Listing property holding the property subtype (`"SFR"`, `"MH"`, ...).
pub const SUBTYPE: &str = "subtype";

/// One filter control bound to one listing property.
#[derive(Debug, Clone)]
pub enum Criterion {
    Range { property: String, range: Range, include_missing: bool },
    Date { property: String, start: Option<NaiveDate>, end: Option<NaiveDate>, include_missing: bool },
    Category { property: String, chosen: Vec<String>, vocabulary: Vocabulary },
    Text { property: String, pattern: TermPattern, include_missing: Option<bool> },
    Flag { property: String, choice: TriState, rule: FlagRule },
    Boundary(BoundarySet),
}

impl Criterion {
    pub fn range(property: impl Into<String>, range: Range, include_missing: bool) -> Self {
        Criterion::Range { property: property.into(), range, include_missing }
    }

    /// A range control without an "include missing" switch: listings missing the value fail.
    pub fn required_range(property: impl Into<String>, range: Range) -> Self { Self::range(property, range, false) }

    pub fn category(property: impl Into<String>, chosen: Vec<String>, vocabulary: Vocabulary) -> Self {
        Criterion::Category { property: property.into(), chosen, vocabulary }
    }

    pub fn text<S: AsRef<str>>(property: impl Into<String>, terms: &[S], include_missing: Option<bool>) -> Result<Self, regex::Error> {
        Ok(Criterion::Text { property: property.into(), pattern: TermPattern::new(terms)?, include_missing })
    }

    pub fn flag(property: impl Into<String>, choice: TriState, rule: FlagRule) -> Self {
        Criterion::Flag { property: property.into(), choice, rule }
    }

    /// Name used in exclusion reports: the bound property, or `"boundary"`.
    pub fn label(&self) -> &str {
        match self {
            Criterion::Range { property, .. }
            | Criterion::Date { property, .. }
            | Criterion::Category { property, .. }
            | Criterion::Text { property, .. }
            | Criterion::Flag { property, .. } => property.as_str(),
            Criterion::Boundary(_) => "boundary",
        }
    }

    pub fn evaluate<F: Filterable + ?Sized>(&self, listing: &F) -> bool {
        match self {
            Criterion::Range { property, range, include_missing } => range.includes(listing.number(property), *include_missing),
            Criterion::Date { property, start, end, include_missing } => {
                date_includes(listing.date(property), *start, *end, *include_missing)
            }
            Criterion::Category { property, chosen, vocabulary } => set_includes(listing.value(property), chosen.as_slice(), *vocabulary),
            Criterion::Text { property, pattern, include_missing } => pattern.matches(listing.text(property), *include_missing),
            Criterion::Flag { property, choice, rule } => {
                !rule.applies_to(listing.text(SUBTYPE)) || flag_matches(listing.text(property), *choice, *rule)
            }
            Criterion::Boundary(boundaries) => boundaries.contains(listing.coordinates()),
        }
    }
}
