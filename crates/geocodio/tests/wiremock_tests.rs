//! Integration tests for the Geocodio client (wiremock-based)
//!
//! These tests mock the Geocodio API to verify request dispatch and
//! response handling without making actual API calls.

use geocodio::{CoordinateInput, GeocodioClient, GeocodioConfig, GeocodioError, Geocoder};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mock(base_url: &str) -> GeocodioConfig {
    GeocodioConfig {
        api_key: Some("test_api_key".to_string()),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

fn client_for_mock(server: &MockServer) -> GeocodioClient {
    GeocodioClient::new(&config_for_mock(&server.uri())).unwrap()
}

/// Flat single-query response with two ranked candidates
fn single_geocode_response() -> serde_json::Value {
    serde_json::json!({
        "input": {
            "formatted_address": "54 W Colorado Blvd, Pasadena, CA 91105"
        },
        "results": [
            {
                "address_components": {
                    "number": "54",
                    "predirectional": "W",
                    "street": "Colorado",
                    "suffix": "Blvd",
                    "city": "Pasadena",
                    "state": "CA",
                    "zip": "91105",
                    "country": "US"
                },
                "formatted_address": "54 W Colorado Blvd, Pasadena, CA 91105",
                "location": { "lat": 34.145760, "lng": -118.151399 },
                "accuracy": 1,
                "accuracy_type": "rooftop"
            },
            {
                "address_components": {
                    "number": "50",
                    "street": "Colorado",
                    "suffix": "Blvd",
                    "city": "Pasadena",
                    "state": "CA",
                    "zip": "91105"
                },
                "formatted_address": "50 Colorado Blvd, Pasadena, CA 91105",
                "location": { "lat": 34.1458, "lng": -118.1512 },
                "accuracy": 0.8,
                "accuracy_type": "range_interpolation"
            }
        ]
    })
}

/// Nested batch response for the given echoed queries, one empty-ish
/// candidate list per query
fn batch_response(queries: &[&str]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = queries
        .iter()
        .map(|q| {
            serde_json::json!({
                "query": q,
                "response": {
                    "results": [
                        {
                            "formatted_address": format!("result for {q}"),
                            "location": { "lat": 1.0, "lng": 2.0 },
                            "accuracy": 1
                        }
                    ]
                }
            })
        })
        .collect();
    serde_json::json!({ "results": results })
}

#[tokio::test]
async fn test_geocode_single_uses_get_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "54 West Colorado Boulevard Pasadena CA 91105"))
        .and(query_param("api_key", "test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_geocode_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let sets = client
        .geocode(&["54 West Colorado Boulevard Pasadena CA 91105"])
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert_eq!(set.query(), "54 West Colorado Boulevard Pasadena CA 91105");
    assert_eq!(set.len(), 2);
    assert_eq!(
        set.best().unwrap().formatted_address.as_deref(),
        Some("54 W Colorado Blvd, Pasadena, CA 91105")
    );
    assert_eq!(set[1].accuracy, Some(0.8));
}

#[tokio::test]
async fn test_geocode_batch_uses_post_path() {
    let server = MockServer::start().await;
    let addresses = ["1 First St", "2 Second St", "3 Third St"];

    Mock::given(method("POST"))
        .and(path("/geocode"))
        .and(query_param("api_key", "test_api_key"))
        .and(body_json(serde_json::json!(addresses)))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_response(&addresses)))
        .expect(1)
        .mount(&server)
        .await;

    // the single-request path must not be taken for multiple inputs
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_geocode_response()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let sets = client.geocode(&addresses).await.unwrap();

    assert_eq!(sets.len(), 3);
    for (set, address) in sets.iter().zip(addresses) {
        assert_eq!(set.query(), address);
        assert_eq!(set.len(), 1);
    }
}

#[tokio::test]
async fn test_reverse_geocode_single_normalizes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("q", "34.1,-118.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_geocode_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);

    // key/value input arrives at the wire in canonical string form
    let sets = client
        .reverse_geocode(&[CoordinateInput::from((34.1, -118.1))])
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].query(), "34.1,-118.1");
    assert_eq!(sets[0].len(), 2);
}

#[tokio::test]
async fn test_reverse_geocode_batch_mixed_representations() {
    let server = MockServer::start().await;
    let canonical = ["34.1,-118.1", "52.52,13.405", "40.7,-74"];

    Mock::given(method("POST"))
        .and(path("/reverse"))
        .and(body_json(serde_json::json!(canonical)))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_response(&canonical)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);

    // a raw string, a long-form pair, and a short-form pair, same call
    let inputs = [
        CoordinateInput::from("34.1,-118.1"),
        serde_json::from_str::<CoordinateInput>(r#"{"latitude": 52.52, "longitude": 13.405}"#)
            .unwrap(),
        serde_json::from_str::<CoordinateInput>(r#"{"lat": 40.7, "lng": -74}"#).unwrap(),
    ];

    let sets = client.reverse_geocode(&inputs).await.unwrap();

    assert_eq!(sets.len(), 3);
    for (set, query) in sets.iter().zip(canonical) {
        assert_eq!(set.query(), query);
    }
}

#[tokio::test]
async fn test_parse_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parse"))
        .and(query_param("q", "54 West Colorado Boulevard Pasadena CA 91105"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address_components": {
                "number": "54",
                "predirectional": "W",
                "street": "Colorado",
                "suffix": "Blvd",
                "city": "Pasadena",
                "state": "CA",
                "zip": "91105"
            },
            "formatted_address": "54 W Colorado Blvd, Pasadena, CA 91105"
        })))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let address = client
        .parse("54 West Colorado Boulevard Pasadena CA 91105")
        .await
        .unwrap();

    assert_eq!(
        address.formatted_address.as_deref(),
        Some("54 W Colorado Blvd, Pasadena, CA 91105")
    );
    assert_eq!(address.number.as_deref(), Some("54"));
    assert_eq!(address.zip.as_deref(), Some("91105"));
    // the parse endpoint yields no location or ranking data
    assert!(address.latitude.is_none());
    assert!(address.accuracy.is_none());
}

#[tokio::test]
async fn test_remote_error_carries_status_and_body() {
    let server = MockServer::start().await;
    let error_body = r#"{"error":"Invalid API key"}"#;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(403).set_body_string(error_body))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.geocode(&["1 First St"]).await.unwrap_err();

    match err {
        GeocodioError::RequestFailed { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, error_body);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_error_on_every_operation() {
    let server = MockServer::start().await;

    for endpoint in ["/geocode", "/reverse", "/parse"] {
        Mock::given(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
    }

    let client = client_for_mock(&server);

    assert!(matches!(
        client.geocode(&["a"]).await.unwrap_err(),
        GeocodioError::RequestFailed { status: 500, .. }
    ));
    assert!(matches!(
        client.geocode(&["a", "b"]).await.unwrap_err(),
        GeocodioError::RequestFailed { status: 500, .. }
    ));
    assert!(matches!(
        client
            .reverse_geocode(&[CoordinateInput::from((1.0, 2.0))])
            .await
            .unwrap_err(),
        GeocodioError::RequestFailed { status: 500, .. }
    ));
    assert!(matches!(
        client.parse("a").await.unwrap_err(),
        GeocodioError::RequestFailed { status: 500, .. }
    ));
    assert!(!client.is_healthy().await);
}

#[tokio::test]
async fn test_batch_count_mismatch_is_protocol_error() {
    let server = MockServer::start().await;

    // two inputs, but the service echoes only one entry
    Mock::given(method("POST"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_response(&["1 First St"])))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client
        .geocode(&["1 First St", "2 Second St"])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GeocodioError::BatchMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[tokio::test]
async fn test_zero_inputs_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(path("/geocode"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(path("/reverse"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);

    assert!(matches!(
        client.geocode(&[]).await.unwrap_err(),
        GeocodioError::InvalidInput(_)
    ));
    assert!(matches!(
        client.reverse_geocode(&[]).await.unwrap_err(),
        GeocodioError::InvalidInput(_)
    ));
}

#[tokio::test]
async fn test_no_match_yields_empty_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let sets = client.geocode(&["gibberish"]).await.unwrap();

    assert_eq!(sets.len(), 1);
    assert!(sets[0].is_empty());
    assert_eq!(sets[0].query(), "gibberish");
}

#[tokio::test]
async fn test_is_healthy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address_components": {}
        })))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    assert!(client.is_healthy().await);
}
