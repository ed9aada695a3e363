//! Overlap resolution between detected spans
//!
//! The reference behavior this system descends from applied replacements
//! sorted by start alone, which mis-slices text whenever spans overlap
//! (an address matched by both the EMAIL and UPI_ID patterns, a digit run
//! matched as both phone and bank account). Overlaps are therefore resolved
//! before any replacement happens.

use crate::domain::{DetectionSource, PrahariError, Result, Span};
use serde::{Deserialize, Serialize};

/// Policy for resolving overlapping spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Longest span wins; ties fall to pattern matches over entity matches,
    /// then earlier start, then kind precedence. Deterministic.
    LongestWins,
    /// Any overlap among collected spans is reported as an error
    Reject,
}

impl Default for OverlapPolicy {
    fn default() -> Self {
        Self::LongestWins
    }
}

impl OverlapPolicy {
    /// Label used in configuration and audit records
    pub fn label(&self) -> &'static str {
        match self {
            Self::LongestWins => "longest_wins",
            Self::Reject => "reject",
        }
    }

    /// Parse a configuration label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "longest_wins" => Some(Self::LongestWins),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

fn source_rank(source: DetectionSource) -> u8 {
    match source {
        DetectionSource::Pattern => 0,
        DetectionSource::Ner => 1,
    }
}

/// Resolve overlaps among `spans` and return the retained set sorted by
/// ascending start.
pub fn resolve_overlaps(spans: &[Span], policy: OverlapPolicy) -> Result<Vec<Span>> {
    match policy {
        OverlapPolicy::Reject => {
            let mut sorted: Vec<&Span> = spans.iter().collect();
            sorted.sort_by_key(|s| (s.start, s.end));
            for pair in sorted.windows(2) {
                if pair[0].overlaps(pair[1]) {
                    return Err(PrahariError::Masking(format!(
                        "overlapping spans: {} at {}..{} and {} at {}..{}",
                        pair[0].kind, pair[0].start, pair[0].end, pair[1].kind, pair[1].start,
                        pair[1].end
                    )));
                }
            }
            let mut retained: Vec<Span> = spans.to_vec();
            retained.sort_by_key(|s| s.start);
            Ok(retained)
        }
        OverlapPolicy::LongestWins => {
            let mut ranked: Vec<&Span> = spans.iter().collect();
            ranked.sort_by(|a, b| {
                b.len()
                    .cmp(&a.len())
                    .then_with(|| source_rank(a.source).cmp(&source_rank(b.source)))
                    .then_with(|| a.start.cmp(&b.start))
                    .then_with(|| a.kind.precedence().cmp(&b.kind.precedence()))
            });

            let mut retained: Vec<Span> = Vec::new();
            for span in ranked {
                if !retained.iter().any(|kept| kept.overlaps(span)) {
                    retained.push(span.clone());
                }
            }
            retained.sort_by_key(|s| s.start);
            Ok(retained)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierKind;

    #[test]
    fn test_disjoint_spans_all_retained() {
        let spans = vec![
            Span::pattern(0, 10, IdentifierKind::Pan, "ABCDE1234F"),
            Span::pattern(20, 31, IdentifierKind::IfscCode, "SBIN0123456"),
        ];
        let retained = resolve_overlaps(&spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(retained.len(), 2);
        assert_eq!(retained[0].start, 0);
    }

    #[test]
    fn test_longest_wins() {
        // EMAIL covers the UPI match plus the TLD
        let spans = vec![
            Span::pattern(0, 13, IdentifierKind::UpiId, "alice@example"),
            Span::pattern(0, 17, IdentifierKind::Email, "alice@example.com"),
        ];
        let retained = resolve_overlaps(&spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].kind, IdentifierKind::Email);
    }

    #[test]
    fn test_equal_length_prefers_pattern_over_entity() {
        let spans = vec![
            Span::entity(0, 10, IdentifierKind::Location, "9876543210"),
            Span::pattern(0, 10, IdentifierKind::IndianPhoneNumber, "9876543210"),
        ];
        let retained = resolve_overlaps(&spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].kind, IdentifierKind::IndianPhoneNumber);
    }

    #[test]
    fn test_equal_length_same_source_uses_precedence() {
        // A bare 10-digit run is both a phone and a bank-account match; the
        // specific phone format outranks the digit-run heuristic
        let spans = vec![
            Span::pattern(5, 15, IdentifierKind::IndianBankAccount, "9876543210"),
            Span::pattern(5, 15, IdentifierKind::IndianPhoneNumber, "9876543210"),
        ];
        let retained = resolve_overlaps(&spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].kind, IdentifierKind::IndianPhoneNumber);
    }

    #[test]
    fn test_reject_policy_errors_on_overlap() {
        let spans = vec![
            Span::pattern(0, 13, IdentifierKind::UpiId, "alice@example"),
            Span::pattern(0, 17, IdentifierKind::Email, "alice@example.com"),
        ];
        let err = resolve_overlaps(&spans, OverlapPolicy::Reject).unwrap_err();
        assert!(matches!(err, PrahariError::Masking(_)));
    }

    #[test]
    fn test_reject_policy_passes_disjoint() {
        let spans = vec![
            Span::pattern(20, 31, IdentifierKind::IfscCode, "SBIN0123456"),
            Span::pattern(0, 10, IdentifierKind::Pan, "ABCDE1234F"),
        ];
        let retained = resolve_overlaps(&spans, OverlapPolicy::Reject).unwrap();
        assert_eq!(retained.len(), 2);
        // Sorted by start regardless of input order
        assert_eq!(retained[0].kind, IdentifierKind::Pan);
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(
            OverlapPolicy::from_label("longest_wins"),
            Some(OverlapPolicy::LongestWins)
        );
        assert_eq!(OverlapPolicy::from_label("REJECT"), Some(OverlapPolicy::Reject));
        assert_eq!(OverlapPolicy::from_label("nonsense"), None);
        assert_eq!(OverlapPolicy::default().label(), "longest_wins");
    }
}
