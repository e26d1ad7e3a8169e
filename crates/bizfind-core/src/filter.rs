//! Chain exclusion and industry narrowing over a normalized result set.

use crate::record::BusinessRecord;
use crate::vocab::{Vocabulary, ALL_INDUSTRIES};

/// The user's industry choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndustrySelection {
    /// No narrowing; only chains are removed.
    #[default]
    All,
    /// Selector label, matched through its keyword set when it has one.
    Category(String),
}

impl std::str::FromStr for IndustrySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_INDUSTRIES) {
            Ok(IndustrySelection::All)
        } else {
            Ok(IndustrySelection::Category(label.to_string()))
        }
    }
}

impl std::fmt::Display for IndustrySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndustrySelection::All => write!(f, "{ALL_INDUSTRIES}"),
            IndustrySelection::Category(label) => write!(f, "{label}"),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `true` if `name` contains any chain keyword, ignoring case.
#[must_use]
pub fn is_chain(name: &str, vocabulary: &Vocabulary) -> bool {
    vocabulary
        .chain_keywords
        .iter()
        .any(|keyword| contains_ignore_case(name, keyword))
}

/// Returns `true` if `industry` belongs to the selected category.
///
/// Labels with a keyword set match when the industry contains any keyword;
/// other labels match when the industry contains the label itself.
#[must_use]
pub fn matches_industry(industry: &str, label: &str, vocabulary: &Vocabulary) -> bool {
    match vocabulary.industry_filter(label) {
        Some(filter) if !filter.keywords.is_empty() => filter
            .keywords
            .iter()
            .any(|keyword| contains_ignore_case(industry, keyword)),
        _ => contains_ignore_case(industry, label.trim()),
    }
}

/// Drops chain businesses, then narrows to `selection`.
#[must_use]
pub fn filter_records(
    records: Vec<BusinessRecord>,
    vocabulary: &Vocabulary,
    selection: &IndustrySelection,
) -> Vec<BusinessRecord> {
    records
        .into_iter()
        .filter(|record| !is_chain(record.name(), vocabulary))
        .filter(|record| match selection {
            IndustrySelection::All => true,
            IndustrySelection::Category(label) => {
                matches_industry(record.industry(), label, vocabulary)
            }
        })
        .collect()
}
