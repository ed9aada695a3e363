//! Detected PII spans

use crate::domain::IdentifierKind;
use serde::{Deserialize, Serialize};

/// Stage of the pipeline that produced a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// Regex pattern matching
    Pattern,
    /// Named entity recognition
    Ner,
}

/// A detected PII occurrence in the original text.
///
/// Offsets are byte offsets into the original UTF-8 text with an exclusive
/// end. The recognizer adapter converts character offsets before
/// constructing spans, so scanner and recognizer spans share the same unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Identifier kind
    pub kind: IdentifierKind,
    /// Matched text as it appeared in the original input
    pub text: String,
    /// Pipeline stage that produced the span
    pub source: DetectionSource,
}

impl Span {
    /// Create a span produced by the regex scanner
    pub fn pattern(start: usize, end: usize, kind: IdentifierKind, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            text: text.into(),
            source: DetectionSource::Pattern,
        }
    }

    /// Create a span produced by the entity recognizer
    pub fn entity(start: usize, end: usize, kind: IdentifierKind, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            text: text.into(),
            source: DetectionSource::Ner,
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check for an empty (degenerate) span
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check the span invariant against the text it was detected in:
    /// `start < end`, both offsets in bounds and on character boundaries.
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.start < self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// Check whether two spans overlap
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}
