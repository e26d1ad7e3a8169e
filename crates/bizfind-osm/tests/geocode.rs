//! Integration tests for `GeocoderClient` using wiremock HTTP mocks.

use bizfind_osm::{GeocoderClient, OsmError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeocoderClient {
    GeocoderClient::new(base_url, 5, "bizfind-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn geocode_returns_first_match() {
    let server = MockServer::start().await;

    let body = json!([
        { "lat": "36.1622767", "lon": "-86.7742984", "display_name": "Nashville, Davidson County, Tennessee" },
        { "lat": "0", "lon": "0", "display_name": "Somewhere else" }
    ]);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Nashville, TN"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(header("user-agent", "bizfind-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let coords = client
        .geocode("Nashville, TN")
        .await
        .expect("should resolve location");

    assert!((coords.lat - 36.162_276_7).abs() < 1e-9);
    assert!((coords.lon - -86.774_298_4).abs() < 1e-9);
}

#[tokio::test]
async fn geocode_empty_array_is_location_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Atlantis").await.unwrap_err();

    assert!(
        matches!(err, OsmError::LocationNotFound(ref q) if q == "Atlantis"),
        "expected LocationNotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_blank_location_skips_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("   ").await.unwrap_err();
    assert!(matches!(err, OsmError::LocationNotFound(_)));
}

#[tokio::test]
async fn geocode_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Nashville, TN").await.unwrap_err();

    assert!(
        matches!(err, OsmError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Nashville, TN").await.unwrap_err();
    assert!(
        matches!(err, OsmError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_invalid_coordinate_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!([{ "lat": "north", "lon": "-86.7" }])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("Nashville, TN").await.unwrap_err();
    assert!(
        matches!(err, OsmError::InvalidCoordinate { field: "lat", ref value } if value == "north"),
        "expected InvalidCoordinate(lat), got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_unreachable_host_is_http_error() {
    let client = test_client("http://127.0.0.1:1");
    let err = client.geocode("Nashville, TN").await.unwrap_err();
    assert!(matches!(err, OsmError::Http(_)), "expected Http, got: {err:?}");
}
