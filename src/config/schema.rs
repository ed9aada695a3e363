//! Configuration schema
//!
//! Root configuration structure mapping to the TOML file, with defaults,
//! validation, and `PRAHARI_*` environment variable overrides.

use crate::config::secret::{SecretString, SecretValue};
use crate::domain::{PrahariError, Result};
use crate::masking::OverlapPolicy;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrahariConfig {
    /// Entity recognizer service settings
    #[serde(default)]
    pub recognizer: RecognizerConfig,

    /// Masking behavior
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Audit logging
    #[serde(default)]
    pub audit: AuditConfig,

    /// Application logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrahariConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.recognizer.validate()?;
        self.masking.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.recognizer.apply_env_overrides()?;
        self.masking.apply_env_overrides()?;
        self.audit.apply_env_overrides()?;
        self.logging.apply_env_overrides()?;
        Ok(())
    }
}

/// Entity recognizer service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognition endpoint URL
    #[serde(default = "default_recognizer_endpoint")]
    pub endpoint: String,

    /// Model identifier passed to the service
    #[serde(default = "default_recognizer_model")]
    pub model: String,

    /// Optional bearer token for the service
    pub auth_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognizer_endpoint(),
            model: default_recognizer_model(),
            auth_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl RecognizerConfig {
    fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint).map_err(|e| {
            PrahariError::Configuration(format!(
                "Invalid recognizer endpoint {}: {e}",
                self.endpoint
            ))
        })?;

        if self.timeout_seconds == 0 {
            return Err(PrahariError::Configuration(
                "recognizer.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PRAHARI_RECOGNIZER_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("PRAHARI_RECOGNIZER_MODEL") {
            self.model = val;
        }
        if let Ok(val) = std::env::var("PRAHARI_RECOGNIZER_AUTH_TOKEN") {
            self.auth_token = Some(Secret::new(SecretValue::from(val)));
        }
        if let Ok(val) = std::env::var("PRAHARI_RECOGNIZER_TIMEOUT_SECONDS") {
            self.timeout_seconds = val.parse().map_err(|_| {
                PrahariError::Configuration(format!(
                    "Invalid PRAHARI_RECOGNIZER_TIMEOUT_SECONDS: {val}"
                ))
            })?;
        }
        Ok(())
    }
}

/// Masking behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MaskingConfig {
    /// Overlap resolution policy
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,

    /// Detect and report without rewriting the text
    #[serde(default)]
    pub dry_run: bool,

    /// Optional TOML pattern library replacing the built-in set
    pub pattern_library: Option<PathBuf>,
}

impl MaskingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(PrahariError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(PrahariError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PRAHARI_MASKING_OVERLAP_POLICY") {
            self.overlap_policy = OverlapPolicy::from_label(&val).ok_or_else(|| {
                PrahariError::Configuration(format!("Invalid PRAHARI_MASKING_OVERLAP_POLICY: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("PRAHARI_MASKING_DRY_RUN") {
            self.dry_run = val.parse().map_err(|_| {
                PrahariError::Configuration(format!("Invalid PRAHARI_MASKING_DRY_RUN: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("PRAHARI_MASKING_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }
        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit entries
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        PrahariError::Configuration(format!(
                            "Failed to create audit log directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PRAHARI_AUDIT_ENABLED") {
            self.enabled = val.parse().map_err(|_| {
                PrahariError::Configuration(format!("Invalid PRAHARI_AUDIT_ENABLED: {val}"))
            })?;
        }
        if let Ok(val) = std::env::var("PRAHARI_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }
        Ok(())
    }
}

/// Application logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable file logging with rotation
    #[serde(default)]
    pub file_enabled: bool,

    /// Log file directory
    #[serde(default = "default_log_dir")]
    pub file_dir: PathBuf,

    /// Rotation policy: daily, hourly, or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_dir: default_log_dir(),
            rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.rotation.as_str() {
            "daily" | "hourly" | "never" => Ok(()),
            other => Err(PrahariError::Configuration(format!(
                "Invalid logging rotation: {other} (expected daily, hourly, or never)"
            ))),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PRAHARI_LOG_LEVEL") {
            self.level = val;
        }
        Ok(())
    }
}

fn default_recognizer_endpoint() -> String {
    "http://localhost:8000/ner".to_string()
}

fn default_recognizer_model() -> String {
    "en-ner-coarse".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_rotation() -> String {
    "daily".to_string()
}
