//! Masking result model

use crate::domain::{IdentifierKind, Span};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of one masking pass over an input text.
///
/// `found_by_kind` records every discovered match in per-kind discovery
/// order, including spans later dropped by overlap resolution; it is built
/// during span collection, independent of the masking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingResult {
    /// Text with retained spans replaced by placeholder tokens
    pub masked_text: String,
    /// Original matched substrings grouped by kind, in discovery order
    pub found_by_kind: HashMap<IdentifierKind, Vec<String>>,
    /// Every detected span (pattern and entity)
    pub detections: Vec<Span>,
    /// Overlap policy applied, for audit
    pub policy_applied: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the masking pass
    pub timestamp: DateTime<Utc>,
}

impl MaskingResult {
    pub fn new(
        masked_text: String,
        found_by_kind: HashMap<IdentifierKind, Vec<String>>,
        detections: Vec<Span>,
        policy_applied: String,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            masked_text,
            found_by_kind,
            detections,
            policy_applied,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Total number of detected spans
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Detection counts grouped by kind
    pub fn counts_by_kind(&self) -> HashMap<IdentifierKind, usize> {
        let mut counts = HashMap::new();
        for span in &self.detections {
            *counts.entry(span.kind).or_insert(0) += 1;
        }
        counts
    }
}
