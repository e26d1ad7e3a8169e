//! Normalization from raw OSM tags to [`BusinessRecord`]s.
//!
//! Unnamed or placeholder-named elements are dropped here, at ingestion,
//! rather than in the filter stage.

use std::collections::HashSet;

use bizfind_core::{AgeEstimate, BusinessRecord, RecordSource};

use crate::classify::classify;
use crate::types::{OverpassElement, Tags};

/// Name assigned when an element has no `name` tag.
pub const UNKNOWN_NAME: &str = "Unknown Business";

/// Names this short are almost always abbreviations or tagging noise.
const MIN_NAME_CHARS: usize = 3;

const ADDRESS_KEYS: [&str; 3] = ["addr:housenumber", "addr:street", "addr:city"];
const FOUNDED_KEYS: [&str; 2] = ["start_date", "opening_date"];
const PHONE_KEYS: [&str; 2] = ["phone", "contact:phone"];
const WEBSITE_KEYS: [&str; 2] = ["website", "contact:website"];

/// First non-blank value among `keys`, trimmed.
fn first_tag<'a>(tags: &'a Tags, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| tags.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

/// Returns `true` for names that must never reach the result set.
#[must_use]
pub fn is_placeholder_name(name: &str) -> bool {
    let name = name.trim();
    name == UNKNOWN_NAME || name.chars().count() < MIN_NAME_CHARS
}

/// Joins house number, street, and city with `", "`, skipping absent parts.
///
/// Falls back to `"Near {searched_location}"` when none are tagged.
#[must_use]
pub fn build_address(tags: &Tags, searched_location: &str) -> String {
    let parts: Vec<&str> = ADDRESS_KEYS
        .iter()
        .filter_map(|key| first_tag(tags, &[*key]))
        .collect();

    if parts.is_empty() {
        format!("Near {searched_location}")
    } else {
        parts.join(", ")
    }
}

/// Extracts the leading four-digit year of a date-like value.
///
/// `"1998-05-01"` and `"1998"` yield 1998; `"~1998"`, `"19985"`, and
/// `"bad-data"` yield `None`.
#[must_use]
pub fn parse_founding_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let digits = raw.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw[4..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Years between the founding year and `reference_year`.
///
/// Missing, malformed, or future dates are [`AgeEstimate::Unknown`].
#[must_use]
pub fn business_age(tags: &Tags, reference_year: i32) -> AgeEstimate {
    first_tag(tags, &FOUNDED_KEYS)
        .and_then(parse_founding_year)
        .and_then(|year| reference_year.checked_sub(year))
        .and_then(|age| u32::try_from(age).ok())
        .map_or(AgeEstimate::Unknown, AgeEstimate::Known)
}

/// Converts one element's tags into a [`BusinessRecord`].
///
/// Returns `None` when the element is unnamed or its name is a placeholder.
#[must_use]
pub fn normalize_element(
    tags: &Tags,
    searched_location: &str,
    reference_year: i32,
) -> Option<BusinessRecord> {
    let name = first_tag(tags, &["name"]).unwrap_or(UNKNOWN_NAME);
    if is_placeholder_name(name) {
        return None;
    }

    let record = BusinessRecord::new(
        name,
        classify(tags),
        build_address(tags, searched_location),
        RecordSource::OpenStreetMap,
    )
    .with_business_age(business_age(tags, reference_year))
    .with_phone(first_tag(tags, &PHONE_KEYS).map(str::to_owned))
    .with_website(first_tag(tags, &WEBSITE_KEYS).map(str::to_owned));

    Some(record)
}

/// Normalizes a batch of elements, dropping placeholders and duplicates.
///
/// Two records are duplicates when their names and addresses match ignoring
/// case; the first occurrence wins.
#[must_use]
pub fn normalize_elements(
    elements: &[OverpassElement],
    searched_location: &str,
    reference_year: i32,
) -> Vec<BusinessRecord> {
    let mut seen = HashSet::new();
    let mut dropped = 0usize;

    let records: Vec<BusinessRecord> = elements
        .iter()
        .filter_map(|element| {
            let record = normalize_element(&element.tags, searched_location, reference_year);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .filter(|record| {
            seen.insert((
                record.name().to_lowercase(),
                record.address().to_lowercase(),
            ))
        })
        .collect();

    tracing::debug!(
        elements = elements.len(),
        records = records.len(),
        dropped,
        "normalized OSM elements"
    );

    records
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
