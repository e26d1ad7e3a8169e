//! Free-text location lookup against a Nominatim-compatible geocoder.

use reqwest::{Client, Url};

use crate::error::OsmError;
use crate::http::{build_client, decode_json, parse_base_url};
use crate::types::{Coordinates, NominatimPlace};

/// Client for the Nominatim `/search` endpoint.
///
/// Use [`GeocoderClient::new`] with the public instance's base URL or point
/// it at a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    base_url: Url,
}

impl GeocoderClient {
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`OsmError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OsmError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url, true)?,
        })
    }

    /// Resolves `location` to the coordinates of the geocoder's first match.
    ///
    /// No retry is attempted.
    ///
    /// # Errors
    ///
    /// - [`OsmError::LocationNotFound`] if `location` is blank or the geocoder
    ///   returns no matches.
    /// - [`OsmError::Http`] / [`OsmError::UnexpectedStatus`] on transport
    ///   failure or a non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not a JSON array of places.
    /// - [`OsmError::InvalidCoordinate`] if `lat`/`lon` are not valid degrees.
    pub async fn geocode(&self, location: &str) -> Result<Coordinates, OsmError> {
        let query = location.trim();
        if query.is_empty() {
            return Err(OsmError::LocationNotFound(location.to_string()));
        }

        let url = self.search_url(query);
        tracing::debug!(%url, "geocoding location");
        let response = self.client.get(url).send().await?;
        let places: Vec<NominatimPlace> =
            decode_json(response, &format!("geocode(q={query})")).await?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| OsmError::LocationNotFound(query.to_string()))?;

        let coordinates = Coordinates {
            lat: parse_degrees("lat", &place.lat, 90.0)?,
            lon: parse_degrees("lon", &place.lon, 180.0)?,
        };
        tracing::info!(
            location = query,
            display_name = place.display_name.as_deref().unwrap_or_default(),
            %coordinates,
            "resolved location"
        );
        Ok(coordinates)
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("search");
        }
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

fn parse_degrees(field: &'static str, raw: &str, limit: f64) -> Result<f64, OsmError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() <= limit)
        .ok_or_else(|| OsmError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}
