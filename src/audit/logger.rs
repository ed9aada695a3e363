//! Audit logger for masking operations
//!
//! Records one entry per masking pass. Detected values are SHA-256 hashed;
//! plaintext PII is never written to the audit log.

use crate::domain::{MaskingResult, PrahariError, Result, Span};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    detections_count: usize,
    policy: String,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    kind: String,
    start: usize,
    end: usize,
    source: String,
    /// SHA-256 hash of the original value
    value_hash: String,
}

/// Audit logger writing JSON-lines (or plain text) entries
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        PrahariError::Io(format!(
                            "Failed to create audit log directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a completed masking pass
    pub fn log_masking(&self, result: &MaskingResult) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: result.timestamp.to_rfc3339(),
            detections_count: result.detections.len(),
            policy: result.policy_applied.clone(),
            processing_time_ms: result.processing_time_ms,
            detections: result
                .detections
                .iter()
                .map(Self::create_audit_detection)
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(span: &Span) -> AuditDetection {
        AuditDetection {
            kind: span.kind.label().to_string(),
            start: span.start,
            end: span.end,
            source: format!("{:?}", span.source).to_lowercase(),
            value_hash: hash_value(&span.text),
        }
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                PrahariError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)
                .map_err(|e| PrahariError::Serialization(e.to_string()))?;
            writeln!(file, "{json_line}")
                .map_err(|e| PrahariError::Io(format!("Failed to write audit entry: {e}")))?;
        } else {
            writeln!(
                file,
                "[{}] Detections: {} | Policy: {} | Time: {}ms",
                entry.timestamp, entry.detections_count, entry.policy, entry.processing_time_ms
            )
            .map_err(|e| PrahariError::Io(format!("Failed to write audit entry: {e}")))?;
        }

        Ok(())
    }
}

/// Hash a detected value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
