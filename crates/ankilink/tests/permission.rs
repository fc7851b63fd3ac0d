//! Tests for the permission check.

mod common;

use ankilink::{AnkiClient, Error};
use common::{mock_action, mock_anki_error, mock_anki_response, setup_mock_server};

#[tokio::test]
async fn granted_recent_version_succeeds() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_response(serde_json::json!({
            "permission": "granted",
            "requireApikey": false,
            "version": 6
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let permission = client.request_permission().await.unwrap();

    assert_eq!(permission.permission, "granted");
    assert!(!permission.require_api_key);
    assert_eq!(permission.version, 6);
}

#[tokio::test]
async fn empty_error_string_counts_as_no_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"permission": "granted", "version": 6},
            "error": ""
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let permission = client.request_permission().await.unwrap();
    assert_eq!(permission.permission, "granted");
}

#[tokio::test]
async fn denied_permission_is_an_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_response(serde_json::json!({"permission": "denied", "version": 6})),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let error = client.request_permission().await.unwrap_err();

    assert!(matches!(error, Error::PermissionDenied(ref p) if p == "denied"));
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn old_version_is_an_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_response(serde_json::json!({"permission": "granted", "version": 5})),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let error = client.request_permission().await.unwrap_err();

    assert!(matches!(error, Error::UnsupportedVersion(5)));
}

#[tokio::test]
async fn explicit_error_field_is_an_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_error("valid api key must be provided"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let error = client.request_permission().await.unwrap_err();

    assert!(matches!(error, Error::AnkiConnect(_)));
    assert!(error.to_string().contains("valid api key"));
}

#[tokio::test]
async fn non_200_status_is_an_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        wiremock::ResponseTemplate::new(500),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.request_permission().await.is_err());
}

#[tokio::test]
async fn connection_refused_is_an_error_not_a_panic() {
    // Nothing listens on this port; the expected failure mode when Anki
    // is not running.
    let client = AnkiClient::builder().url("http://127.0.0.1:1").build();
    let error = client.request_permission().await.unwrap_err();

    assert!(matches!(
        error,
        Error::ConnectionRefused | Error::Http(_)
    ));
    assert!(!error.to_string().is_empty());
}
