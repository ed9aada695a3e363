//! Pattern-based identifier detection
//!
//! The registry compiles the fixed identifier patterns once at startup; the
//! scanner runs every registry pattern over the full input independently
//! and reports all matches as spans.

pub mod patterns;
pub mod scanner;

pub use patterns::{CompiledPattern, PatternRegistry};
pub use scanner::RegexScanner;
