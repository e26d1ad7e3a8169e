//! The search pipeline: geocode, query, normalize, fall back, filter.
//!
//! Geocoding failures halt the search. Overpass failures never do; an area
//! that yields no usable records is replaced by sample data and the report
//! says why.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use bizfind_core::{
    filter_records, generate_sample, AppConfig, BusinessRecord, IndustrySelection, Vocabulary,
};
use bizfind_osm::{normalize_elements, Coordinates, GeocoderClient, OsmError, OverpassClient};

/// Why sample data replaced the live result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum FallbackReason {
    /// Every category was queried but no named business survived normalization.
    NoResults,
    /// Every category request failed.
    AllQueriesFailed,
    /// The live search was skipped on request.
    Requested,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NoResults => write!(f, "no businesses found in this area"),
            FallbackReason::AllQueriesFailed => write!(f, "the business search service failed"),
            FallbackReason::Requested => write!(f, "sample data requested"),
        }
    }
}

/// Outcome of one search, ready for rendering.
#[derive(Debug)]
pub(crate) struct SearchReport {
    pub location: String,
    pub industry: IndustrySelection,
    /// `None` when geocoding was skipped.
    pub coordinates: Option<Coordinates>,
    pub records: Vec<BusinessRecord>,
    pub fallback: Option<FallbackReason>,
}

pub(crate) struct SearchPipeline {
    geocoder: GeocoderClient,
    overpass: OverpassClient,
    vocabulary: Vocabulary,
    category_keys: Vec<String>,
    sample_count: usize,
    reference_year: i32,
}

impl SearchPipeline {
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub(crate) fn from_config(config: &AppConfig, vocabulary: Vocabulary) -> anyhow::Result<Self> {
        let geocoder = GeocoderClient::new(
            &config.geocoder_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let overpass = OverpassClient::new(
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_radius_deg(config.search_radius_deg)
        .with_result_limit(config.result_limit)
        .with_inter_request_delay(Duration::from_millis(config.inter_request_delay_ms));

        Ok(Self {
            geocoder,
            overpass,
            vocabulary,
            category_keys: config.category_keys.clone(),
            sample_count: config.sample_count,
            reference_year: config.reference_year,
        })
    }

    #[must_use]
    pub(crate) fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Runs a live search for `location` narrowed to `industry`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be geocoded.
    pub(crate) async fn run<R: Rng + ?Sized>(
        &self,
        location: &str,
        industry: &IndustrySelection,
        rng: &mut R,
    ) -> anyhow::Result<SearchReport> {
        let coordinates = self
            .geocoder
            .geocode(location)
            .await
            .map_err(|e| match e {
                OsmError::LocationNotFound(query) => {
                    anyhow::anyhow!("location not found: {query}")
                }
                other => anyhow::anyhow!("geocoding failed for {location}: {other}"),
            })?;

        let outcome = self
            .overpass
            .query_area(coordinates, &self.category_keys)
            .await;
        let mut records = normalize_elements(&outcome.elements, location, self.reference_year);

        let fallback = if records.is_empty() {
            let reason = if outcome.all_failed() {
                FallbackReason::AllQueriesFailed
            } else {
                FallbackReason::NoResults
            };
            tracing::info!(
                location,
                reason = ?reason,
                count = self.sample_count,
                "substituting sample data"
            );
            records = generate_sample(location, self.sample_count, rng);
            Some(reason)
        } else {
            None
        };

        let records = filter_records(records, &self.vocabulary, industry);
        tracing::info!(location, %industry, records = records.len(), "search finished");

        Ok(SearchReport {
            location: location.to_string(),
            industry: industry.clone(),
            coordinates: Some(coordinates),
            records,
            fallback,
        })
    }

    /// Builds a report from sample data alone, without touching the network.
    pub(crate) fn sample_only<R: Rng + ?Sized>(
        &self,
        location: &str,
        industry: &IndustrySelection,
        rng: &mut R,
    ) -> SearchReport {
        let records = generate_sample(location, self.sample_count, rng);
        SearchReport {
            location: location.to_string(),
            industry: industry.clone(),
            coordinates: None,
            records: filter_records(records, &self.vocabulary, industry),
            fallback: Some(FallbackReason::Requested),
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
