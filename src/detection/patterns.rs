//! Pattern registry for identifier detection

use crate::domain::{IdentifierKind, PrahariError, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Identifier category label
    pub category: String,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// Identifier kind
    pub kind: IdentifierKind,
    /// Confidence score
    pub confidence: f32,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Read-only registry of compiled identifier patterns.
///
/// Constructed once at startup, either from the built-in embedded library
/// or from a caller-supplied TOML file, and shared read-only afterwards.
/// Malformed regexes and unknown categories are construction-time errors.
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
    patterns_by_kind: HashMap<IdentifierKind, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a registry from a TOML pattern library file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PrahariError::Pattern(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| PrahariError::Pattern(format!("Failed to parse pattern library: {e}")))?;

        let mut patterns = Vec::new();
        let mut patterns_by_kind: HashMap<IdentifierKind, Vec<CompiledPattern>> = HashMap::new();

        for (name, def) in library.patterns {
            let kind = IdentifierKind::from_label(&def.category).ok_or_else(|| {
                PrahariError::Pattern(format!(
                    "Unknown category in pattern '{}': {}",
                    name, def.category
                ))
            })?;

            if kind.is_entity_kind() {
                return Err(PrahariError::Pattern(format!(
                    "Category {} in pattern '{}' belongs to the entity recognizer, not the registry",
                    def.category, name
                )));
            }

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    PrahariError::Pattern(format!("Invalid regex in pattern '{name}': {e}"))
                })?;

                let compiled = CompiledPattern {
                    regex,
                    kind,
                    confidence: def.confidence,
                };

                patterns.push(compiled.clone());
                patterns_by_kind.entry(kind).or_default().push(compiled);
            }
        }

        Ok(Self {
            patterns,
            patterns_by_kind,
        })
    }

    /// Create a registry with the built-in pattern library
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/identifier_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific kind
    pub fn patterns_for_kind(&self, kind: IdentifierKind) -> Option<&[CompiledPattern]> {
        self.patterns_by_kind.get(&kind).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_builtin_loads() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.all_patterns().len(), 9);
    }

    #[test_case("ABCDE1234F", IdentifierKind::Pan ; "pan")]
    #[test_case("2345 6789 0123", IdentifierKind::Aadhar ; "aadhar")]
    #[test_case("J8369854", IdentifierKind::IndianPassport ; "passport")]
    #[test_case("MH12 20021234567", IdentifierKind::DrivingLicense ; "dl with space")]
    #[test_case("MH-1220021234567", IdentifierKind::DrivingLicense ; "dl with dash")]
    #[test_case("john.doe@okbank", IdentifierKind::UpiId ; "upi")]
    #[test_case("123456789012", IdentifierKind::IndianBankAccount ; "bank account")]
    #[test_case("SBIN0123456", IdentifierKind::IfscCode ; "ifsc")]
    #[test_case("+919876543210", IdentifierKind::IndianPhoneNumber ; "phone with country code")]
    #[test_case("09876543210", IdentifierKind::IndianPhoneNumber ; "phone with trunk zero")]
    #[test_case("9876543210", IdentifierKind::IndianPhoneNumber ; "bare phone")]
    #[test_case("john.doe@example.com", IdentifierKind::Email ; "email")]
    fn test_pattern_matches(sample: &str, kind: IdentifierKind) {
        let registry = PatternRegistry::builtin().unwrap();
        let patterns = registry.patterns_for_kind(kind).unwrap();
        assert!(
            patterns.iter().any(|p| p.regex.is_match(sample)),
            "{kind} pattern should match {sample:?}"
        );
    }

    #[test]
    fn test_aadhar_leading_digit_constraint() {
        // First digit of an Aadhar number is 2-9 per the pattern
        let registry = PatternRegistry::builtin().unwrap();
        let patterns = registry
            .patterns_for_kind(IdentifierKind::Aadhar)
            .unwrap();
        assert!(!patterns.iter().any(|p| p.regex.is_match("1234 5678 9012")));
    }

    #[test]
    fn test_malformed_regex_rejected() {
        let toml = r#"
            [patterns.broken]
            patterns = ['[unclosed']
            confidence = 0.9
            category = "PAN"
        "#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(matches!(err, PrahariError::Pattern(_)));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml = r#"
            [patterns.mystery]
            patterns = ['\d+']
            confidence = 0.9
            category = "CREDIT_SCORE"
        "#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }

    #[test]
    fn test_entity_category_rejected() {
        let toml = r#"
            [patterns.names]
            patterns = ['[A-Z][a-z]+']
            confidence = 0.5
            category = "PERSON"
        "#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }
}
