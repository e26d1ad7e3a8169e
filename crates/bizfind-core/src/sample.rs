//! Synthetic records used when a live search produces nothing.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::record::{AgeEstimate, BusinessRecord, RecordSource};
use crate::vocab::{
    SAMPLE_AREA_CODES, SAMPLE_BUSINESS_TYPES, SAMPLE_INDUSTRIES, SAMPLE_NAME_PREFIXES,
    SAMPLE_STREETS,
};

const BUSINESS_AGE_YEARS: std::ops::RangeInclusive<u32> = 1..=20;
const OWNER_AGE_YEARS: std::ops::RangeInclusive<u32> = 25..=70;
const REVENUE_THOUSANDS_USD: std::ops::RangeInclusive<u32> = 50..=500;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Generates `count` synthetic businesses located in `location`.
///
/// Industry and business type are drawn independently, so a "Bakery"
/// industry may be paired with a "Workshop" name.
pub fn generate_sample<R: Rng + ?Sized>(
    location: &str,
    count: usize,
    rng: &mut R,
) -> Vec<BusinessRecord> {
    (0..count)
        .map(|_| {
            let industry = pick(rng, SAMPLE_INDUSTRIES);
            let business_type = pick(rng, SAMPLE_BUSINESS_TYPES);
            let name = format!("{} {business_type}", pick(rng, SAMPLE_NAME_PREFIXES));
            let address = format!(
                "{} {}, {location}",
                rng.random_range(100..=9999u32),
                pick(rng, SAMPLE_STREETS)
            );
            let area_code = SAMPLE_AREA_CODES.choose(rng).copied().unwrap_or(555);
            let phone = format!("({area_code}) 555-{:04}", rng.random_range(0..10_000u32));

            BusinessRecord::new(name, industry, address, RecordSource::Sample)
                .with_business_type(Some(business_type.to_string()))
                .with_business_age(AgeEstimate::Known(rng.random_range(BUSINESS_AGE_YEARS)))
                .with_owner_age(AgeEstimate::Known(rng.random_range(OWNER_AGE_YEARS)))
                .with_phone(Some(phone))
                .with_revenue_estimate(Some(rng.random_range(REVENUE_THOUSANDS_USD)))
        })
        .collect()
}
