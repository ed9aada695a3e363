//! Configuration management
//!
//! TOML configuration with `${VAR}` substitution, `PRAHARI_*` environment
//! overrides, and validation at load time.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{AuditConfig, LoggingConfig, MaskingConfig, PrahariConfig, RecognizerConfig};
pub use secret::{SecretString, SecretValue};
