// Prahari - PII detection and masking
// Copyright (c) 2025 Prahari Contributors
// Licensed under the MIT License

//! # Prahari - PII detection and masking
//!
//! Prahari detects and masks personally-identifiable information in
//! free-form text, targeting Indian identifier formats (PAN, Aadhar,
//! passport, driving licence, UPI ID, bank account, IFSC code, phone
//! number, email) plus named entities (person, organization, location)
//! produced by an external entity-recognition model. It is intended as a
//! pre-processing pass for prompt-sanitization and data-redaction pipelines
//! before text is forwarded to logging, storage, or a third-party model.
//!
//! ## Architecture
//!
//! One pass over the text, in four stages:
//!
//! - [`detection`] - Pattern registry and regex scanner
//! - [`recognizer`] - Adapter to the external entity-recognition service
//! - [`masking`] - Span merging, overlap resolution, placeholder rewriting
//! - [`engine`] - Orchestration, dry-run mode, audit logging
//!
//! Supporting layers follow the same shape as the rest of the crate:
//! [`domain`] (types and errors), [`config`], [`logging`], [`audit`],
//! [`cli`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prahari::config::PrahariConfig;
//! use prahari::engine::MaskingEngine;
//! use prahari::recognizer::HttpRecognizer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PrahariConfig::default();
//!
//!     // The recognizer is loaded once and shared; model initialization is
//!     // the expensive step and is amortized across analyze() calls.
//!     let recognizer = Arc::new(HttpRecognizer::new(&config.recognizer)?);
//!     let engine = MaskingEngine::new(config, recognizer)?;
//!
//!     let result = engine
//!         .analyze("Mr. John Doe's PAN number is ABCDE1234F")
//!         .await?;
//!
//!     println!("{}", result.masked_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Overlap handling
//!
//! A substring matched by two kinds (an address hit by both the EMAIL and
//! UPI_ID patterns, a digit run hit as both phone and bank account) is
//! resolved before rewriting: the longest span wins, ties prefer pattern
//! matches over entity matches, then the more specific kind. The `reject`
//! policy reports overlaps as errors instead. Replacements are applied in
//! descending start order so pending span offsets stay valid while the
//! buffer changes length.
//!
//! ## Error handling
//!
//! The library uses [`domain::PrahariError`] throughout. Recognizer failure
//! is fatal for a masking pass; there is no silent regex-only fallback.
//!
//! ## Known limitations
//!
//! The bank-account pattern is a bare 9-18 digit run and over-matches
//! phone numbers and order IDs. This is inherited behavior, kept as-is;
//! overlap resolution prefers the more specific kinds when spans collide.

pub mod audit;
pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod masking;
pub mod recognizer;

pub use config::PrahariConfig;
pub use domain::{IdentifierKind, MaskingResult, PrahariError, Span};
pub use engine::MaskingEngine;
