//! Submission workflow: file selection, validation, and the request
//! lifecycle state machine.
//!
//! The network backend sits behind the [`AuditBackend`] trait so the
//! workflow can be driven against the real API client or a test double.
//! Each workflow instance is independent; there is no shared state.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::AuditError;
use crate::models::{AuditReport, DocType, SelectedDocument};

/// Seam between the workflow and the audit service.
#[async_trait]
pub trait AuditBackend {
    async fn run_audit(
        &self,
        document: &SelectedDocument,
        doc_type: DocType,
    ) -> Result<AuditReport, AuditError>;
}

/// Lifecycle of one submission. Exactly one variant is active at a time;
/// carrying the document inside `Ready`/`Submitting` makes "submitting with
/// no file" unrepresentable.
#[derive(Debug, Clone)]
pub enum SubmissionState {
    Idle,
    Ready(SelectedDocument),
    Submitting(SelectedDocument),
    Succeeded(AuditReport),
    /// A failed validation or request. `retained` keeps the previously held
    /// valid document so the user can retry without re-picking.
    Failed {
        message: String,
        retained: Option<SelectedDocument>,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting(_))
    }

    /// The document available for the next submit, if any.
    pub fn held_document(&self) -> Option<&SelectedDocument> {
        match self {
            SubmissionState::Ready(doc) | SubmissionState::Submitting(doc) => Some(doc),
            SubmissionState::Failed { retained, .. } => retained.as_ref(),
            SubmissionState::Idle | SubmissionState::Succeeded(_) => None,
        }
    }

    /// Error message surfaced to the user, if the last action failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Owns file selection and the request lifecycle for one submission at a
/// time. All work is driven by the caller; the only suspension point is the
/// backend call inside [`submit`](SubmissionWorkflow::submit).
pub struct SubmissionWorkflow<B> {
    backend: B,
    doc_type: DocType,
    state: SubmissionState,
}

impl<B: AuditBackend> SubmissionWorkflow<B> {
    pub fn new(backend: B) -> Self {
        SubmissionWorkflow {
            backend,
            doc_type: DocType::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn selected(&self) -> Option<&SelectedDocument> {
        self.state.held_document()
    }

    /// Validate a candidate file. On success the new document replaces any
    /// previously held one and clears any prior error; on violation the
    /// previous document is kept and the specific validation message is
    /// surfaced.
    pub fn select_document(
        &mut self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Bytes,
    ) -> Result<(), AuditError> {
        match SelectedDocument::new(name, content_type, bytes) {
            Ok(document) => {
                self.state = SubmissionState::Ready(document);
                Ok(())
            }
            Err(err) => {
                let retained = self.take_held();
                self.state = SubmissionState::Failed {
                    message: err.to_string(),
                    retained,
                };
                Err(err)
            }
        }
    }

    /// Pure state update; never touches the held document or error state.
    pub fn set_doc_type(&mut self, doc_type: DocType) {
        self.doc_type = doc_type;
    }

    /// Submit the held document. No-op while a request is already in
    /// flight; surfaces `NoFileSelected` without a network call when
    /// nothing is held. Exactly one backend call otherwise, no retries.
    pub async fn submit(&mut self) -> &SubmissionState {
        if self.state.is_submitting() {
            return &self.state;
        }

        let Some(document) = self.take_held() else {
            self.state = SubmissionState::Failed {
                message: AuditError::NoFileSelected.to_string(),
                retained: None,
            };
            return &self.state;
        };

        tracing::debug!(
            document = %document.name(),
            doc_type = %self.doc_type,
            size_bytes = document.size_bytes(),
            "submitting document for audit"
        );
        self.state = SubmissionState::Submitting(document.clone());

        match self.backend.run_audit(&document, self.doc_type).await {
            Ok(report) => {
                tracing::info!(
                    document = %document.name(),
                    score = report.compliance_score,
                    "audit completed"
                );
                // Successful submission resets the form.
                self.doc_type = DocType::default();
                self.state = SubmissionState::Succeeded(report);
            }
            Err(err) => {
                tracing::warn!(error = %err, code = err.error_code(), "audit submission failed");
                self.state = SubmissionState::Failed {
                    message: err.to_string(),
                    retained: Some(document),
                };
            }
        }

        &self.state
    }

    fn take_held(&mut self) -> Option<SelectedDocument> {
        match std::mem::replace(&mut self.state, SubmissionState::Idle) {
            SubmissionState::Ready(doc) | SubmissionState::Submitting(doc) => Some(doc),
            SubmissionState::Failed { retained, .. } => retained,
            SubmissionState::Idle | SubmissionState::Succeeded(_) => None,
        }
    }
}
