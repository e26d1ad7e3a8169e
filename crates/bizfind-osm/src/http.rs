//! Shared HTTP plumbing for the OSM clients.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::OsmError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, OsmError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

/// Parses `raw` into a URL, optionally forcing exactly one trailing slash so
/// relative joins append to the path instead of replacing its last segment.
pub(crate) fn parse_base_url(raw: &str, trailing_slash: bool) -> Result<Url, OsmError> {
    let candidate = if trailing_slash {
        format!("{}/", raw.trim_end_matches('/'))
    } else {
        raw.to_string()
    };
    Url::parse(&candidate).map_err(|e| OsmError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Asserts a 2xx status and decodes the body as `T`.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, OsmError> {
    let status = response.status();
    if !status.is_success() {
        return Err(OsmError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
