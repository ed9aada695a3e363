//! HTTP adapter for a remote token-classification service

use super::{map_entity_label, EntityRecognizer};
use crate::config::RecognizerConfig;
use crate::domain::{RecognizerError, Result, Span};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Request body sent to the recognition endpoint
#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    model: &'a str,
    text: &'a str,
}

/// One entity as reported by the service.
///
/// Offsets are Unicode scalar (character) offsets into the submitted text,
/// the convention of the common NER serving stacks.
#[derive(Debug, Deserialize)]
struct WireEntity {
    start: usize,
    end: usize,
    label: String,
}

/// Response body from the recognition endpoint
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    entities: Vec<WireEntity>,
}

/// Entity recognizer backed by a remote token-classification service.
///
/// The client is built once and reused; the underlying connection pool makes
/// the instance cheap to share behind an `Arc`. Transport failures are
/// mapped into [`RecognizerError`] so callers never see HTTP client types.
pub struct HttpRecognizer {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
    auth_token: Option<crate::config::SecretString>,
}

impl HttpRecognizer {
    /// Create a recognizer from configuration.
    ///
    /// Fails if the endpoint URL is invalid or the HTTP client cannot be
    /// constructed; per the error-handling contract this is fatal for the
    /// pipeline, which cannot mask names or locations without entities.
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            RecognizerError::ConnectionFailed(format!(
                "Invalid recognizer endpoint {}: {e}",
                config.endpoint
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                RecognizerError::ConnectionFailed(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Convert a service entity (character offsets) into a span over `text`
    /// (byte offsets). The scanner reports byte offsets, so both sources end
    /// up in the same unit before merging.
    fn entity_to_span(text: &str, entity: &WireEntity) -> Result<Option<Span>> {
        let kind = match map_entity_label(&entity.label) {
            Some(kind) => kind,
            None => return Ok(None),
        };

        if entity.start >= entity.end {
            return Err(RecognizerError::InvalidSpan(format!(
                "empty span {}..{} for label {}",
                entity.start, entity.end, entity.label
            ))
            .into());
        }

        // char offset -> byte offset table; index char_count maps to len()
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());

        let start = *boundaries.get(entity.start).ok_or_else(|| {
            RecognizerError::InvalidSpan(format!(
                "start {} beyond text length for label {}",
                entity.start, entity.label
            ))
        })?;
        let end = *boundaries.get(entity.end).ok_or_else(|| {
            RecognizerError::InvalidSpan(format!(
                "end {} beyond text length for label {}",
                entity.end, entity.label
            ))
        })?;

        Ok(Some(Span::entity(start, end, kind, &text[start..end])))
    }

    fn map_send_error(e: reqwest::Error) -> RecognizerError {
        if e.is_timeout() {
            RecognizerError::Timeout(e.to_string())
        } else if e.is_connect() {
            RecognizerError::ConnectionFailed(e.to_string())
        } else {
            RecognizerError::InvalidResponse(e.to_string())
        }
    }
}

#[async_trait]
impl EntityRecognizer for HttpRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Span>> {
        let body = RecognizeRequest {
            model: &self.model,
            text,
        };

        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let err = match status.as_u16() {
                401 | 403 => RecognizerError::AuthenticationFailed(message),
                code if status.is_server_error() => RecognizerError::ServerError {
                    status: code,
                    message,
                },
                code => RecognizerError::ClientError {
                    status: code,
                    message,
                },
            };
            return Err(err.into());
        }

        let parsed: RecognizeResponse = response.json().await.map_err(|e| {
            RecognizerError::InvalidResponse(format!("Failed to parse entities: {e}"))
        })?;

        let mut spans = Vec::with_capacity(parsed.entities.len());
        for entity in &parsed.entities {
            if let Some(span) = Self::entity_to_span(text, entity)? {
                spans.push(span);
            }
        }

        tracing::debug!(
            entities = parsed.entities.len(),
            mapped = spans.len(),
            "Entity recognition completed"
        );

        Ok(spans)
    }
}
