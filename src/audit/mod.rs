//! Audit logging for masking operations

pub mod logger;

pub use logger::AuditLogger;
