//! Main masking engine
//!
//! [`MaskingEngine`] orchestrates the pipeline: regex scan, entity
//! recognition, overlap resolution, placeholder substitution, and audit
//! logging.
//!
//! # Thread safety
//!
//! The engine is `Send + Sync` and can be shared across tasks with `Arc`.
//! The pattern registry is compiled once at construction and the recognizer
//! is injected as a shared handle; there is no per-call mutable shared
//! state.
//!
//! # Examples
//!
//! ```no_run
//! use prahari::config::PrahariConfig;
//! use prahari::engine::MaskingEngine;
//! use prahari::recognizer::HttpRecognizer;
//! use std::sync::Arc;
//!
//! # async fn example() -> prahari::domain::Result<()> {
//! let config = PrahariConfig::default();
//! let recognizer = Arc::new(HttpRecognizer::new(&config.recognizer)?);
//! let engine = MaskingEngine::new(config, recognizer)?;
//!
//! let result = engine.analyze("PAN ABCDE1234F here").await?;
//! println!("{}", result.masked_text);
//! # Ok(())
//! # }
//! ```

use crate::audit::AuditLogger;
use crate::config::PrahariConfig;
use crate::detection::{PatternRegistry, RegexScanner};
use crate::domain::{MaskingResult, Result};
use crate::masking::{apply_masks, collect_findings};
use crate::recognizer::EntityRecognizer;
use std::sync::Arc;
use std::time::Instant;

/// Masking engine coordinating detection, recognition, and rewriting
pub struct MaskingEngine {
    config: PrahariConfig,
    scanner: RegexScanner,
    recognizer: Arc<dyn EntityRecognizer>,
    audit_logger: Option<AuditLogger>,
}

impl MaskingEngine {
    /// Create a new masking engine.
    ///
    /// Compiles the pattern registry (built-in or from the configured
    /// pattern library) and sets up the audit logger if enabled. The entity
    /// recognizer is an explicit dependency; construct it once at process
    /// start and share it, model initialization being the expensive step.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, the pattern
    /// library cannot be compiled, or the audit logger cannot be created.
    pub fn new(config: PrahariConfig, recognizer: Arc<dyn EntityRecognizer>) -> Result<Self> {
        config.validate()?;

        let scanner = if let Some(ref pattern_path) = config.masking.pattern_library {
            RegexScanner::with_registry(PatternRegistry::from_file(pattern_path)?)
        } else {
            RegexScanner::new()?
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            scanner,
            recognizer,
            audit_logger,
        })
    }

    /// Detect and mask PII in `text`.
    ///
    /// Runs the regex scanner and the entity recognizer over the full text,
    /// merges the spans, and rewrites retained spans into placeholder
    /// tokens. In dry-run mode the original text is returned with the
    /// detections attached.
    ///
    /// Recognizer failure aborts the call; there is no regex-only fallback.
    pub async fn analyze(&self, text: &str) -> Result<MaskingResult> {
        let start = Instant::now();

        let mut spans = self.scanner.scan(text);
        let pattern_count = spans.len();

        let entity_spans = self.recognizer.recognize(text).await?;
        spans.extend(entity_spans);

        tracing::debug!(
            pattern_spans = pattern_count,
            entity_spans = spans.len() - pattern_count,
            "Span collection completed"
        );

        let found_by_kind = collect_findings(&spans);
        let policy = self.config.masking.overlap_policy;

        let masked_text = if self.config.masking.dry_run {
            text.to_string()
        } else {
            apply_masks(text, &spans, policy)?
        };

        let processing_time = start.elapsed().as_millis() as u64;

        let result = MaskingResult::new(
            masked_text,
            found_by_kind,
            spans,
            policy.label().to_string(),
            processing_time,
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_masking(&result)?;
        }

        tracing::info!(
            detections = result.total_detections(),
            duration_ms = processing_time,
            "Masking pass completed"
        );

        Ok(result)
    }

    /// Mask a batch of texts, preserving input order.
    pub async fn analyze_batch(&self, texts: &[String]) -> Result<Vec<MaskingResult>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.analyze(text).await?);
        }
        Ok(results)
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.masking.dry_run
    }
}
