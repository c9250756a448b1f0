//! Integration tests for the Herrenberg connector using wiremock HTTP mocks.

use chrono::{TimeZone, Utc};
use openparking_core::{Availability, Datasource, LotKind, LotState};
use openparking_herrenberg::{Herrenberg, HerrenbergError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_source(server: &MockServer) -> Herrenberg {
    let feed_url = format!("{}/parkapi.json", server.uri());
    Herrenberg::with_feed_url(30, &feed_url).expect("client construction should not fail")
}

fn fixture_feed() -> serde_json::Value {
    serde_json::json!({
        "data_source": "https://www.herrenberg.de",
        "last_downloaded": "23-01-15T08:30:00.000",
        "last_updated": "23-01-15T08:27:13.000",
        "lots": [
            {
                "lot_type": "Tiefgarage",
                "address": "Schloßberg 9",
                "name": "Tiefgarage Altstadt",
                "forecast": false,
                "state": "open",
                "coords": { "lat": 48.5951, "lng": 8.8665 },
                "url": "https://www.herrenberg.de/parken/altstadt",
                "total": 150,
                "free": 42,
                "opening_hours": "24/7",
                "fees": "1,50 €/h"
            },
            {
                "lot_type": "Parkplatz",
                "address": "Seestraße 2",
                "name": "Seestraße",
                "forecast": true,
                "state": "unknown",
                "coords": { "lat": 48.5936, "lng": 8.8653 },
                "total": 47
            },
            {
                "lot_type": "Park-Ride",
                "address": "Bahnhofstraße 1",
                "name": "P+R Bahnhof",
                "forecast": false,
                "state": "nodata",
                "coords": { "lat": 48.5940, "lng": 8.8631 },
                "total": 90,
                "free": 90
            }
        ]
    })
}

#[tokio::test]
async fn data_converts_the_feed_into_a_canonical_data_point() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parkapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture_feed()))
        .mount(&server)
        .await;

    let point = test_source(&server).data().await.expect("should decode feed");

    assert_eq!(
        point.timestamp,
        Utc.with_ymd_and_hms(2023, 1, 15, 7, 30, 0).unwrap()
    );

    // The Seestraße record has no free-count and must be dropped.
    assert_eq!(point.lots.len(), 2);

    let garage = point.lots[0].as_ref().unwrap();
    assert_eq!(garage.name, "Tiefgarage Altstadt");
    assert_eq!(garage.kind, LotKind::Underground);
    assert_eq!(garage.state, LotState::Open);
    assert_eq!(garage.available, Availability::Discrete(42));
    assert_eq!(garage.capacity, 150);
    assert_eq!(garage.city, "Herrenberg");
    assert_eq!(garage.pricing.as_deref(), Some("1,50 €/h"));
    assert_eq!(garage.opening_hours.as_deref(), Some("24/7"));
    assert_eq!(
        garage.data_age,
        Utc.with_ymd_and_hms(2023, 1, 15, 7, 27, 13).unwrap()
    );

    let park_and_ride = point.lots[1].as_ref().unwrap();
    assert_eq!(park_and_ride.name, "P+R Bahnhof");
    assert_eq!(park_and_ride.kind, LotKind::Lot);
    assert_eq!(park_and_ride.state, LotState::NoData);
    assert_eq!(park_and_ride.available, Availability::Discrete(90));
}

#[tokio::test]
async fn http_error_surfaces_as_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parkapi.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_source(&server).data().await.unwrap_err();
    assert!(matches!(err, HerrenbergError::Http(_)));
}

#[tokio::test]
async fn invalid_json_surfaces_as_malformed_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parkapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_source(&server).data().await.unwrap_err();
    assert!(matches!(err, HerrenbergError::MalformedFeed(_)));
}

#[tokio::test]
async fn unknown_vocabulary_value_fails_the_whole_feed() {
    let server = MockServer::start().await;

    let mut feed = fixture_feed();
    feed["lots"][0]["lot_type"] = "Sonstiges".into();

    Mock::given(method("GET"))
        .and(path("/parkapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .mount(&server)
        .await;

    let err = test_source(&server).data().await.unwrap_err();
    assert!(matches!(err, HerrenbergError::MalformedFeed(_)));
}

#[tokio::test]
async fn empty_feed_yields_an_empty_data_point() {
    let server = MockServer::start().await;

    let mut feed = fixture_feed();
    feed["lots"] = serde_json::json!([]);

    Mock::given(method("GET"))
        .and(path("/parkapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .mount(&server)
        .await;

    let point = test_source(&server).data().await.expect("should decode feed");
    assert!(point.lots.is_empty());
}
