//! Entity recognizer adapter
//!
//! The entity-recognition model is an external collaborator. This module
//! defines the adapter trait the engine depends on, the mapping from the
//! model's native labels to identifier kinds, and the implementations:
//! [`http::HttpRecognizer`] for a remote token-classification service and
//! [`StaticRecognizer`] for deterministic fixtures.
//!
//! Recognizer failure is surfaced to the caller; there is no silent
//! regex-only fallback, since pattern masking alone does not cover names,
//! organizations, or locations.

pub mod http;

use crate::domain::{IdentifierKind, Result, Span};
use async_trait::async_trait;

pub use http::HttpRecognizer;

/// Trait for entity-recognition implementations
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Detect named entities in `text`.
    ///
    /// Returned spans use byte offsets into `text`, the same unit the regex
    /// scanner reports, and carry one of the entity kinds (PERSON,
    /// ORGANIZATION, LOCATION).
    async fn recognize(&self, text: &str) -> Result<Vec<Span>>;
}

/// Map a model's native entity label to an identifier kind.
///
/// Labels follow the common NER tag sets (PERSON/ORG/GPE plus the PER/LOC
/// aliases); anything else is ignored per the adapter contract.
pub fn map_entity_label(label: &str) -> Option<IdentifierKind> {
    match label.to_uppercase().as_str() {
        "PERSON" | "PER" => Some(IdentifierKind::Person),
        "ORG" | "ORGANIZATION" => Some(IdentifierKind::Organization),
        "GPE" | "LOC" | "LOCATION" => Some(IdentifierKind::Location),
        _ => None,
    }
}

/// Recognizer that returns a fixed set of spans.
///
/// Useful for deterministic pipelines and tests where model output is known
/// in advance. Spans are returned as configured, in emission order.
pub struct StaticRecognizer {
    spans: Vec<Span>,
}

impl StaticRecognizer {
    /// Create a recognizer that emits the given spans for every input
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Create a recognizer that never emits entities
    pub fn empty() -> Self {
        Self { spans: Vec::new() }
    }
}

#[async_trait]
impl EntityRecognizer for StaticRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<Span>> {
        Ok(self.spans.clone())
    }
}
