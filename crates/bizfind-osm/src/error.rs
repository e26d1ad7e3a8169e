use thiserror::Error;

/// Errors returned by the geocoding and Overpass clients.
#[derive(Debug, Error)]
pub enum OsmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The geocoder answered but had no match for the query.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("geocoder returned invalid {field} value \"{value}\"")]
    InvalidCoordinate { field: &'static str, value: String },

    /// Overpass reported a runtime error (query timeout, memory limit) in a 200 response.
    #[error("Overpass query failed: {0}")]
    QueryFailed(String),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
