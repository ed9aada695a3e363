//! Placeholder substitution over resolved spans

use super::overlap::{resolve_overlaps, OverlapPolicy};
use crate::domain::{IdentifierKind, PrahariError, Result, Span};
use std::collections::HashMap;

/// Group the original matched substrings by kind, in discovery order.
///
/// Built from the full span list before overlap resolution, so the report
/// covers every discovered match including spans later dropped from the
/// rewrite.
pub fn collect_findings(spans: &[Span]) -> HashMap<IdentifierKind, Vec<String>> {
    let mut found: HashMap<IdentifierKind, Vec<String>> = HashMap::new();
    for span in spans {
        found.entry(span.kind).or_default().push(span.text.clone());
    }
    found
}

/// Rewrite `text`, substituting each retained span with its kind's
/// placeholder token.
///
/// Spans are validated against `text`, overlaps resolved per `policy`, and
/// replacements applied in descending start order. Replacing right-to-left
/// keeps the offsets of not-yet-processed spans valid even though each
/// replacement changes the buffer length; the retained set is
/// non-overlapping, so every replacement slices exactly its original match.
pub fn apply_masks(text: &str, spans: &[Span], policy: OverlapPolicy) -> Result<String> {
    for span in spans {
        if !span.is_valid_for(text) {
            return Err(PrahariError::Masking(format!(
                "span {}..{} ({}) out of bounds for text of {} bytes",
                span.start,
                span.end,
                span.kind,
                text.len()
            )));
        }
    }

    let mut retained = resolve_overlaps(spans, policy)?;
    retained.sort_by(|a, b| b.start.cmp(&a.start));

    let mut masked = text.to_string();
    for span in &retained {
        masked.replace_range(span.start..span.end, span.kind.placeholder());
    }

    Ok(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spans_identity() {
        let text = "nothing to hide";
        assert_eq!(
            apply_masks(text, &[], OverlapPolicy::LongestWins).unwrap(),
            text
        );
        assert!(collect_findings(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_right_to_left_replacement() {
        // Replacement lengths differ from the originals in both directions
        let text = "call 9876543210 or email a@b.com";
        let spans = vec![
            Span::pattern(5, 15, IdentifierKind::IndianPhoneNumber, "9876543210"),
            Span::pattern(25, 32, IdentifierKind::Email, "a@b.com"),
        ];
        let masked = apply_masks(text, &spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(masked, "call [PHONE_NUMBER] or email [EMAIL_ADDRESS]");
    }

    #[test]
    fn test_span_order_does_not_matter() {
        let text = "call 9876543210 or email a@b.com";
        let spans = vec![
            Span::pattern(25, 32, IdentifierKind::Email, "a@b.com"),
            Span::pattern(5, 15, IdentifierKind::IndianPhoneNumber, "9876543210"),
        ];
        let masked = apply_masks(text, &spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(masked, "call [PHONE_NUMBER] or email [EMAIL_ADDRESS]");
    }

    #[test]
    fn test_overlapping_spans_masked_once() {
        let text = "pay alice@example.com now";
        let spans = vec![
            Span::pattern(4, 17, IdentifierKind::UpiId, "alice@example"),
            Span::pattern(4, 21, IdentifierKind::Email, "alice@example.com"),
        ];
        let masked = apply_masks(text, &spans, OverlapPolicy::LongestWins).unwrap();
        assert_eq!(masked, "pay [EMAIL_ADDRESS] now");
    }

    #[test]
    fn test_invalid_span_rejected() {
        let text = "short";
        let spans = vec![Span::pattern(0, 99, IdentifierKind::Pan, "x")];
        let err = apply_masks(text, &spans, OverlapPolicy::LongestWins).unwrap_err();
        assert!(matches!(err, PrahariError::Masking(_)));
    }

    #[test]
    fn test_findings_keep_discovery_order() {
        let spans = vec![
            Span::pattern(0, 10, IdentifierKind::IndianPhoneNumber, "9876543210"),
            Span::pattern(20, 30, IdentifierKind::IndianPhoneNumber, "8765432109"),
            Span::pattern(40, 50, IdentifierKind::Pan, "ABCDE1234F"),
        ];
        let found = collect_findings(&spans);
        assert_eq!(
            found.get(&IdentifierKind::IndianPhoneNumber).unwrap(),
            &vec!["9876543210".to_string(), "8765432109".to_string()]
        );
        assert_eq!(found.get(&IdentifierKind::Pan).unwrap().len(), 1);
    }

    #[test]
    fn test_findings_include_dropped_overlaps() {
        let text = "pay alice@example.com now";
        let spans = vec![
            Span::pattern(4, 17, IdentifierKind::UpiId, "alice@example"),
            Span::pattern(4, 21, IdentifierKind::Email, "alice@example.com"),
        ];
        let found = collect_findings(&spans);
        // Both kinds are reported even though only EMAIL survives masking
        assert!(found.contains_key(&IdentifierKind::UpiId));
        assert!(found.contains_key(&IdentifierKind::Email));
        let masked = apply_masks(text, &spans, OverlapPolicy::LongestWins).unwrap();
        assert!(!masked.contains("[UPI_ID]"));
    }
}
