//! Upload validation rules.
//!
//! These constants mirror the limits the audit service enforces on its side;
//! the client checks them before any bytes go on the wire.

use crate::error::AuditError;

/// Hard upload limit: 16 MiB.
pub const MAX_UPLOAD_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Content types the audit service accepts.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
];

/// Extension hint surfaced to file pickers.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt";

/// Validate a candidate upload against the size limit and content-type
/// allow-set. Size is checked first, so an oversized file reports
/// `FileTooLarge` whatever its content type.
pub fn validate_upload(content_type: &str, size_bytes: u64) -> Result<(), AuditError> {
    if size_bytes > MAX_UPLOAD_SIZE_BYTES {
        return Err(AuditError::FileTooLarge { size_bytes });
    }
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(AuditError::UnsupportedType {
            content_type: content_type.to_string(),
        });
    }
    Ok(())
}

/// Map a filename extension to the content type used for upload.
/// Unknown extensions map to `application/octet-stream`, which
/// `validate_upload` rejects.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_allowed_types() {
        for content_type in ALLOWED_CONTENT_TYPES {
            assert!(
                validate_upload(content_type, 10 * 1024).is_ok(),
                "{} should be accepted",
                content_type
            );
        }
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let err = validate_upload("image/png", 10 * 1024).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");

        let err = validate_upload("application/octet-stream", 1).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_size_boundary_is_inclusive() {
        assert!(validate_upload("application/pdf", MAX_UPLOAD_SIZE_BYTES).is_ok());
        let err = validate_upload("application/pdf", MAX_UPLOAD_SIZE_BYTES + 1).unwrap_err();
        assert_eq!(err.error_code(), "FILE_TOO_LARGE");
        assert_eq!(MAX_UPLOAD_SIZE_BYTES, 16_777_216);
    }

    #[test]
    fn test_oversized_reported_regardless_of_type() {
        // Even with a disallowed content type, size wins.
        let err = validate_upload("image/png", MAX_UPLOAD_SIZE_BYTES + 1).unwrap_err();
        assert_eq!(err.error_code(), "FILE_TOO_LARGE");
    }

    #[test]
    fn test_content_type_for_extension() {
        assert_eq!(content_type_for_extension("pdf"), "application/pdf");
        assert_eq!(content_type_for_extension("PDF"), "application/pdf");
        assert_eq!(content_type_for_extension("doc"), "application/msword");
        assert_eq!(
            content_type_for_extension("docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for_extension("txt"), "text/plain");
        assert_eq!(
            content_type_for_extension("exe"),
            "application/octet-stream"
        );
    }
}
