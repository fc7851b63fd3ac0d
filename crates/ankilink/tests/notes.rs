//! Tests for the add-note action.

mod common;

use ankilink::{AnkiClient, Error, Note};
use common::{mock_action, mock_anki_error, mock_anki_response, setup_mock_server};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn add_note_round_trip() {
    let server = setup_mock_server().await;
    // Match the exact note body so the test pins the wire format.
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "addNote",
            "version": 6,
            "params": {
                "note": {
                    "deckName": "Default",
                    "modelName": "Basic",
                    "fields": {"Front": "hello", "Back": "bonjour"}
                }
            }
        })))
        .respond_with(mock_anki_response(12345_i64))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = Note::basic("Default", "Basic", "hello", "bonjour");
    let id = client.add_note(note).await.unwrap();

    assert_eq!(id, 12345);
}

#[tokio::test]
async fn add_note_error_message_is_surfaced() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "addNote",
        mock_anki_error("cannot create note because it is a duplicate"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = Note::basic("Default", "Basic", "hello", "bonjour");
    let error = client.add_note(note).await.unwrap_err();

    assert!(matches!(error, Error::AnkiConnect(_)));
    assert!(error.to_string().contains("duplicate"));
}

#[tokio::test]
async fn add_note_with_neither_result_nor_error_is_an_invariant_violation() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "addNote",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": null,
            "error": null
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = Note::basic("Default", "Basic", "hello", "bonjour");
    let error = client.add_note(note).await.unwrap_err();

    assert!(matches!(error, Error::EmptyResponse));
}

#[tokio::test]
async fn add_note_sends_the_configured_api_key() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "addNote",
            "apiKey": "secret"
        })))
        .respond_with(mock_anki_response(1_i64))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnkiClient::builder()
        .url(server.uri())
        .api_key("secret")
        .build();
    let note = Note::basic("Default", "Basic", "front", "back");
    assert_eq!(client.add_note(note).await.unwrap(), 1);
}
