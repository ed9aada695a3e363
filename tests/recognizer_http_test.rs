//! Integration tests for the HTTP entity recognizer adapter

use prahari::config::RecognizerConfig;
use prahari::domain::{IdentifierKind, PrahariError, RecognizerError};
use prahari::recognizer::{EntityRecognizer, HttpRecognizer};

fn config_for(server: &mockito::ServerGuard) -> RecognizerConfig {
    RecognizerConfig {
        endpoint: format!("{}/ner", server.url()),
        ..RecognizerConfig::default()
    }
}

#[tokio::test]
async fn test_recognize_maps_entities() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ner")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [
                {"start": 0, "end": 8, "label": "PERSON"},
                {"start": 18, "end": 24, "label": "GPE"},
                {"start": 9, "end": 15, "label": "CARDINAL"}
            ]}"#,
        )
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let spans = recognizer
        .recognize("John Doe moved to Mumbai today")
        .await
        .unwrap();

    mock.assert_async().await;

    // CARDINAL is ignored; PERSON and GPE are mapped
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].kind, IdentifierKind::Person);
    assert_eq!(spans[0].text, "John Doe");
    assert_eq!(spans[1].kind, IdentifierKind::Location);
}

#[tokio::test]
async fn test_recognize_converts_character_offsets() {
    // "café " shifts byte offsets ahead of character offsets
    let text = "café Mumbai calling";
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ner")
        .with_status(200)
        .with_body(r#"{"entities": [{"start": 5, "end": 11, "label": "GPE"}]}"#)
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let spans = recognizer.recognize(text).await.unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "Mumbai");
    assert_eq!(&text[spans[0].start..spans[0].end], "Mumbai");
}

#[tokio::test]
async fn test_server_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ner")
        .with_status(503)
        .with_body("model loading")
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let err = recognizer.recognize("anything").await.unwrap_err();

    match err {
        PrahariError::Recognizer(RecognizerError::ServerError { status, .. }) => {
            assert_eq!(status, 503);
        }
        other => panic!("expected server error, got: {other}"),
    }
}

#[tokio::test]
async fn test_auth_failure_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ner")
        .with_status(401)
        .with_body("invalid token")
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let err = recognizer.recognize("anything").await.unwrap_err();

    assert!(matches!(
        err,
        PrahariError::Recognizer(RecognizerError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ner")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let err = recognizer.recognize("anything").await.unwrap_err();

    assert!(matches!(
        err,
        PrahariError::Recognizer(RecognizerError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_out_of_bounds_span_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ner")
        .with_status(200)
        .with_body(r#"{"entities": [{"start": 0, "end": 9999, "label": "PERSON"}]}"#)
        .create_async()
        .await;

    let recognizer = HttpRecognizer::new(&config_for(&server)).unwrap();
    let err = recognizer.recognize("short text").await.unwrap_err();

    assert!(matches!(
        err,
        PrahariError::Recognizer(RecognizerError::InvalidSpan(_))
    ));
}

#[test]
fn test_invalid_endpoint_is_fatal() {
    let config = RecognizerConfig {
        endpoint: "not a url".to_string(),
        ..RecognizerConfig::default()
    };
    assert!(HttpRecognizer::new(&config).is_err());
}
