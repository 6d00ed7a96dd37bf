use std::sync::{Arc, mpsc};

use storefront::core::action::Action;
use storefront::location::{
    Coordinate, IpLocator, LocationError, LocationProvider, PermissionPolicy, PermissionStatus,
};
use storefront::tui::spawn_location_fetch;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn locator_for(server: &MockServer) -> IpLocator {
    IpLocator::new(Some(server.uri()), PermissionPolicy::Allow)
}

#[tokio::test]
async fn test_ip_lookup_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"success","country":"Brazil","lat":-23.5505,"lon":-46.6333,"query":"1.2.3.4"}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let position = locator_for(&mock_server).current_position().await.unwrap();
    assert_eq!(
        position,
        Coordinate {
            latitude: -23.5505,
            longitude: -46.6333,
        }
    );
}

#[tokio::test]
async fn test_ip_lookup_fail_status_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"fail","message":"private range","query":"127.0.0.1"}"#,
        ))
        .mount(&mock_server)
        .await;

    let result = locator_for(&mock_server).current_position().await;
    match result {
        Err(LocationError::Unavailable(message)) => assert_eq!(message, "private range"),
        other => panic!("Expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ip_lookup_http_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let result = locator_for(&mock_server).current_position().await;
    assert!(matches!(result, Err(LocationError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_denied_policy_never_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"success","lat":1.0,"lon":2.0}"#,
        ))
        .expect(0)
        .mount(&mock_server)
        .await;

    let locator = Arc::new(IpLocator::new(Some(mock_server.uri()), PermissionPolicy::Deny));
    assert_eq!(
        locator.request_permission().await.unwrap(),
        PermissionStatus::Denied
    );

    let (tx, rx) = mpsc::channel();
    spawn_location_fetch(locator, tx).await.unwrap();

    assert_eq!(rx.try_recv().unwrap(), Action::PermissionDenied);
    assert!(rx.try_recv().is_err());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_allowed_policy_reports_position_through_handler() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"success","lat":1.5,"lon":2.5}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (tx, rx) = mpsc::channel();
    spawn_location_fetch(Arc::new(locator_for(&mock_server)), tx).await.unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        Action::LocationLoaded(Coordinate {
            latitude: 1.5,
            longitude: 2.5,
        })
    );
}
