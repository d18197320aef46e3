//! Domain models shared across the audit client crates.

pub mod audit;
pub mod service;

pub use audit::{AuditReport, DocType, SelectedDocument};
pub use service::{BatchAuditEntry, BatchAuditResponse, HealthResponse, ServiceStats};
