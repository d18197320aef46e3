//! Audit Core Library
//!
//! This crate provides the domain models, upload validation rules, error
//! types, submission state machine, and result presentation shared across
//! the audit client components. It knows nothing about HTTP; the network
//! backend plugs in through [`workflow::AuditBackend`].

pub mod error;
pub mod models;
pub mod report;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use error::AuditError;
pub use models::{
    AuditReport, BatchAuditEntry, BatchAuditResponse, DocType, HealthResponse, SelectedDocument,
    ServiceStats,
};
pub use report::{ReportView, ScoreTier};
pub use validation::{ACCEPTED_EXTENSIONS, ALLOWED_CONTENT_TYPES, MAX_UPLOAD_SIZE_BYTES};
pub use workflow::{AuditBackend, SubmissionState, SubmissionWorkflow};
