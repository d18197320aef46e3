//! Error types module
//!
//! All errors surfaced by the submission workflow and the API client are
//! unified under the `AuditError` enum. Validation variants are produced
//! locally before any network activity; request variants come from the
//! audit service or the transport underneath it.

/// Unified error type for the audit client.
///
/// Every variant is recoverable: the caller keeps its workflow instance and
/// may retry after any of these.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Invalid file type. Please upload PDF, DOC, DOCX, or TXT files.")]
    UnsupportedType { content_type: String },

    #[error("File size exceeds 16MB limit.")]
    FileTooLarge { size_bytes: u64 },

    #[error("Please select a file to upload.")]
    NoFileSelected,

    /// Non-2xx response from the audit service. `message` is the service's
    /// reported `error` field when the body carried one.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// No response could be obtained at all.
    #[error("Error processing document. Please ensure the audit service is reachable at {endpoint}")]
    Transport {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },

    /// 2xx response whose body did not decode into an audit report.
    #[error("Malformed audit response: {0}")]
    MalformedResponse(String),
}

impl AuditError {
    /// Machine-readable error code (e.g. "FILE_TOO_LARGE").
    pub fn error_code(&self) -> &'static str {
        match self {
            AuditError::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            AuditError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AuditError::NoFileSelected => "NO_FILE_SELECTED",
            AuditError::Service { .. } => "SERVICE_ERROR",
            AuditError::Transport { .. } => "TRANSPORT_FAILURE",
            AuditError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    /// True for errors raised by local validation, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuditError::UnsupportedType { .. }
                | AuditError::FileTooLarge { .. }
                | AuditError::NoFileSelected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_codes() {
        let err = AuditError::UnsupportedType {
            content_type: "application/zip".to_string(),
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload PDF, DOC, DOCX, or TXT files."
        );

        let err = AuditError::FileTooLarge {
            size_bytes: 20_000_000,
        };
        assert_eq!(err.error_code(), "FILE_TOO_LARGE");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "File size exceeds 16MB limit.");

        let err = AuditError::NoFileSelected;
        assert_eq!(err.error_code(), "NO_FILE_SELECTED");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please select a file to upload.");
    }

    #[test]
    fn test_service_error_carries_reported_message() {
        let err = AuditError::Service {
            status: 500,
            message: "parser crashed".to_string(),
        };
        assert_eq!(err.error_code(), "SERVICE_ERROR");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "parser crashed");
    }

    #[test]
    fn test_transport_error_names_endpoint() {
        let err = AuditError::Transport {
            endpoint: "http://localhost:5000/api/audit".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert_eq!(err.error_code(), "TRANSPORT_FAILURE");
        assert!(err.to_string().contains("http://localhost:5000/api/audit"));
    }
}
