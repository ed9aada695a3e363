//! Span merging and text masking
//!
//! The central algorithm: merge scanner and recognizer spans, resolve
//! overlaps under a deterministic policy, and rewrite the text by replacing
//! retained spans with placeholder tokens in descending start order so that
//! offsets of spans not yet processed stay valid.

pub mod masker;
pub mod overlap;

pub use masker::{apply_masks, collect_findings};
pub use overlap::{resolve_overlaps, OverlapPolicy};
