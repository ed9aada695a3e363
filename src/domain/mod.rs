//! Core domain types and models
//!
//! This module defines the data model shared by every stage of the masking
//! pipeline: identifier kinds, detected spans, masking results, and the
//! domain error hierarchy.

pub mod errors;
pub mod kind;
pub mod masking;
pub mod result;
pub mod span;

pub use errors::{PrahariError, RecognizerError};
pub use kind::{placeholder_for, IdentifierKind};
pub use masking::MaskingResult;
pub use result::Result;
pub use span::{DetectionSource, Span};
