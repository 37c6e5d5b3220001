use super::UNKNOWN;
use crate::value;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Case-insensitive alternation over user-chosen terms, compiled once per filter specification.
///
/// Terms are display strings, not regular expressions: every term is escaped, so `"a.b"` only
/// matches a literal `a.b`. Blank terms are dropped and [`UNKNOWN`] is kept aside as a request for
/// listings with no value.
#[derive(Debug, Clone)]
pub struct TermPattern {
    regex: Option<Regex>,
    unknown: bool,
}

impl TermPattern {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, regex::Error> {
        let mut unknown = false;
        let mut alternatives = Vec::new();
        for term in terms.iter().map(|t| t.as_ref().trim()).filter(|t| !t.is_empty()) {
            if term == UNKNOWN {
                unknown = true;
            } else {
                alternatives.push(regex::escape(term));
            }
        }

        let regex = if alternatives.is_empty() {
            None
        } else {
            Some(RegexBuilder::new(&alternatives.join("|")).case_insensitive(true).build()?)
        };
        Ok(Self { regex, unknown })
    }

    /// Whether [`UNKNOWN`] was among the chosen terms.
    pub fn selects_unknown(&self) -> bool { self.unknown }

    /// Evaluates a free-text value.
    ///
    /// `include_missing` is the optional separate "include missing" switch; controls that only
    /// expose the [`UNKNOWN`] pseudo-term pass `None`.
    pub fn matches(&self, value: Option<&str>, include_missing: Option<bool>) -> bool {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(text) => self.regex.as_ref().is_some_and(|re| re.is_match(text)),
            None => self.unknown || include_missing == Some(true),
        }
    }
}

/// One-shot form of [`TermPattern::matches`] for a raw property value.
///
/// With nothing chosen, only a missing value can pass, and only through `include_missing`. If the
/// terms cannot be compiled, present values fail and the missing-value carve-outs still apply.
pub fn text_matches<S: AsRef<str>>(value: Option<&Value>, chosen_terms: &[S], include_missing: Option<bool>) -> bool {
    let text = value.and_then(value::text);
    match TermPattern::new(chosen_terms) {
        Ok(pattern) => pattern.matches(text, include_missing),
        Err(e) => {
            tracing::warn!("term pattern failed to compile: {}", e);
            let unknown = chosen_terms.iter().any(|t| t.as_ref().trim() == UNKNOWN);
            text.is_none() && (unknown || include_missing == Some(true))
        }
    }
}
