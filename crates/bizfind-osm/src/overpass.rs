//! Area business queries against the Overpass API.
//!
//! One query is issued per category key, sequentially, with a fixed pause
//! between requests. A failed category is recorded in [`AreaQueryOutcome`]
//! and contributes no elements; it never aborts the remaining categories.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::OsmError;
use crate::http::{build_client, decode_json, parse_base_url};
use crate::types::{Coordinates, OverpassElement, OverpassResponse};

/// Server-side timeout embedded in every query, in seconds.
const QUERY_TIMEOUT_SECS: u32 = 25;

const DEFAULT_RADIUS_DEG: f64 = 0.02;
const DEFAULT_RESULT_LIMIT: u32 = 100;
const DEFAULT_INTER_REQUEST_DELAY: Duration = Duration::from_millis(1000);

/// A `(south, west, north, east)` rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Square box extending `radius_deg` from `center` on every side,
    /// clamped to valid latitudes and longitudes.
    #[must_use]
    pub fn around(center: Coordinates, radius_deg: f64) -> Self {
        Self {
            south: (center.lat - radius_deg).max(-90.0),
            west: (center.lon - radius_deg).max(-180.0),
            north: (center.lat + radius_deg).min(90.0),
            east: (center.lon + radius_deg).min(180.0),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6},{:.6},{:.6},{:.6}",
            self.south, self.west, self.north, self.east
        )
    }
}

/// Result of a multi-category area query.
///
/// Distinguishes an area that genuinely has no businesses (`attempted > 0`,
/// no failures, no elements) from one where every request failed.
#[derive(Debug, Default)]
pub struct AreaQueryOutcome {
    pub elements: Vec<OverpassElement>,
    /// Category keys whose request failed.
    pub failed_categories: Vec<String>,
    /// Number of category requests issued.
    pub attempted: usize,
}

impl AreaQueryOutcome {
    /// `true` when at least one category was queried and all of them failed.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failed_categories.len() == self.attempted
    }
}

/// Client for the Overpass `interpreter` endpoint.
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
    radius_deg: f64,
    result_limit: u32,
    inter_request_delay: Duration,
}

impl OverpassClient {
    /// Creates a client posting to `endpoint` (the full interpreter URL).
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`OsmError::InvalidBaseUrl`] if `endpoint` does not
    /// parse.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OsmError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            endpoint: parse_base_url(endpoint, false)?,
            radius_deg: DEFAULT_RADIUS_DEG,
            result_limit: DEFAULT_RESULT_LIMIT,
            inter_request_delay: DEFAULT_INTER_REQUEST_DELAY,
        })
    }

    #[must_use]
    pub fn with_radius_deg(mut self, radius_deg: f64) -> Self {
        self.radius_deg = radius_deg;
        self
    }

    #[must_use]
    pub fn with_result_limit(mut self, result_limit: u32) -> Self {
        self.result_limit = result_limit;
        self
    }

    #[must_use]
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Builds the Overpass QL for one category key inside `bbox`.
    #[must_use]
    pub fn build_query(&self, key: &str, bbox: &BoundingBox) -> String {
        format!(
            "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
             (\n  \
             node[\"{key}\"]({bbox});\n  \
             way[\"{key}\"]({bbox});\n  \
             relation[\"{key}\"]({bbox});\n\
             );\n\
             out center {limit};",
            limit = self.result_limit
        )
    }

    /// Fetches every element tagged with `key` inside `bbox`.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] / [`OsmError::UnexpectedStatus`] on transport
    ///   failure or a non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not an Overpass JSON document.
    /// - [`OsmError::QueryFailed`] if the server reports a runtime error.
    pub async fn query_category(
        &self,
        key: &str,
        bbox: &BoundingBox,
    ) -> Result<Vec<OverpassElement>, OsmError> {
        let query = self.build_query(key, bbox);
        tracing::debug!(key, %bbox, "querying Overpass");

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await?;
        let body: OverpassResponse =
            decode_json(response, &format!("overpass(key={key})")).await?;

        if let Some(remark) = body.remark.filter(|r| r.contains("error")) {
            return Err(OsmError::QueryFailed(remark));
        }
        Ok(body.elements)
    }

    /// Queries each of `category_keys` around `center`, one after another.
    ///
    /// Sleeps for the configured inter-request delay between requests. Per
    /// category failures are logged and recorded, never propagated.
    pub async fn query_area(
        &self,
        center: Coordinates,
        category_keys: &[String],
    ) -> AreaQueryOutcome {
        let bbox = BoundingBox::around(center, self.radius_deg);
        let mut outcome = AreaQueryOutcome::default();

        for (idx, key) in category_keys.iter().enumerate() {
            if idx > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }
            outcome.attempted += 1;

            match self.query_category(key, &bbox).await {
                Ok(elements) => {
                    tracing::debug!(key = %key, count = elements.len(), "category query succeeded");
                    outcome.elements.extend(elements);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "category query failed; skipping");
                    outcome.failed_categories.push(key.clone());
                }
            }
        }

        tracing::info!(
            elements = outcome.elements.len(),
            attempted = outcome.attempted,
            failed = outcome.failed_categories.len(),
            "area query finished"
        );
        outcome
    }
}
