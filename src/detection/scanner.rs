//! Regex scanner over the pattern registry

use super::patterns::PatternRegistry;
use crate::domain::{Result, Span};
use std::sync::Arc;

/// Scanner that applies every registry pattern to an input text.
///
/// Each pattern is run over the full text independently with standard
/// left-to-right non-overlapping matching; matches from different patterns
/// are not deduplicated here. Deterministic and side-effect free.
pub struct RegexScanner {
    registry: Arc<PatternRegistry>,
    confidence_threshold: f32,
}

impl RegexScanner {
    /// Create a scanner with the built-in pattern registry
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::builtin()?;
        Ok(Self::with_registry(registry))
    }

    /// Create a scanner with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            confidence_threshold: 0.7,
        }
    }

    /// Set the confidence threshold; patterns scored below it are skipped
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Find all pattern matches in `text` and return them as spans.
    ///
    /// Offsets are byte offsets into `text`; the regex engine guarantees
    /// they fall on character boundaries.
    pub fn scan(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();

        for pattern in self.registry.all_patterns() {
            if pattern.confidence < self.confidence_threshold {
                continue;
            }

            for matched in pattern.regex.find_iter(text) {
                spans.push(Span::pattern(
                    matched.start(),
                    matched.end(),
                    pattern.kind,
                    matched.as_str(),
                ));
            }
        }

        spans
    }

    /// The registry backing this scanner
    pub fn registry(&self) -> &Arc<PatternRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierKind;

    #[test]
    fn test_scan_finds_multiple_kinds() {
        let scanner = RegexScanner::new().unwrap();
        let text = "PAN ABCDE1234F, IFSC SBIN0123456";
        let spans = scanner.scan(text);

        let pan = spans
            .iter()
            .find(|s| s.kind == IdentifierKind::Pan)
            .unwrap();
        assert_eq!(pan.start, 4);
        assert_eq!(pan.end, 14);
        assert_eq!(pan.text, "ABCDE1234F");

        let ifsc = spans
            .iter()
            .find(|s| s.kind == IdentifierKind::IfscCode)
            .unwrap();
        assert_eq!(&text[ifsc.start..ifsc.end], "SBIN0123456");
    }

    #[test]
    fn test_scan_no_matches() {
        let scanner = RegexScanner::new().unwrap();
        assert!(scanner.scan("nothing sensitive here").is_empty());
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_patterns_not_deduplicated_across_kinds() {
        let scanner = RegexScanner::new().unwrap();
        // An address is matched by both the EMAIL and the UPI_ID patterns
        let spans = scanner.scan("pay me at alice@example.com please");
        assert!(spans.iter().any(|s| s.kind == IdentifierKind::Email));
        assert!(spans.iter().any(|s| s.kind == IdentifierKind::UpiId));
    }

    #[test]
    fn test_matches_within_pattern_do_not_overlap() {
        let scanner = RegexScanner::new().unwrap();
        let spans = scanner.scan("9876543210 8765432109");
        let phones: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == IdentifierKind::IndianPhoneNumber)
            .collect();
        assert_eq!(phones.len(), 2);
        assert!(phones[0].end <= phones[1].start);
    }

    #[test]
    fn test_confidence_threshold_skips_patterns() {
        let scanner = RegexScanner::new().unwrap().with_confidence_threshold(0.9);
        // Bank-account heuristic sits at 0.7 and is skipped at this threshold
        let spans = scanner.scan("order 123456789012 shipped");
        assert!(!spans
            .iter()
            .any(|s| s.kind == IdentifierKind::IndianBankAccount));
    }

    #[test]
    fn test_span_offsets_valid() {
        let scanner = RegexScanner::new().unwrap();
        let text = "Phone +919876543210 and mail a@b.com done";
        for span in scanner.scan(text) {
            assert!(span.is_valid_for(text));
            assert_eq!(&text[span.start..span.end], span.text);
        }
    }
}
