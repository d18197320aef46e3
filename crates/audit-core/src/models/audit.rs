use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::validation::validate_upload;

/// Category tag accompanying an upload. The audit service uses it to pick
/// its rule set; the client treats it as opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    #[default]
    Contract,
    Agreement,
    Policy,
    Other,
}

impl DocType {
    pub const ALL: [DocType; 4] = [
        DocType::Contract,
        DocType::Agreement,
        DocType::Policy,
        DocType::Other,
    ];

    /// Wire tag sent in the `docType` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Contract => "contract",
            DocType::Agreement => "agreement",
            DocType::Policy => "policy",
            DocType::Other => "other",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contract" => Ok(DocType::Contract),
            "agreement" => Ok(DocType::Agreement),
            "policy" => Ok(DocType::Policy),
            "other" => Ok(DocType::Other),
            other => Err(format!(
                "unknown document type '{}' (expected contract, agreement, policy, or other)",
                other
            )),
        }
    }
}

/// A document that passed upload validation and is ready to submit.
///
/// Construction goes through [`SelectedDocument::new`], so a held value is
/// always valid; there is no partially valid state.
#[derive(Clone)]
pub struct SelectedDocument {
    name: String,
    content_type: String,
    size_bytes: u64,
    bytes: Bytes,
}

// Manual Debug: the raw content is an opaque handle, not something to dump.
impl fmt::Debug for SelectedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedDocument")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

impl SelectedDocument {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Bytes,
    ) -> Result<Self, AuditError> {
        let name = name.into();
        let content_type = content_type.into();
        let size_bytes = bytes.len() as u64;
        validate_upload(&content_type, size_bytes)?;
        Ok(Self {
            name,
            content_type,
            size_bytes,
            bytes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// Compliance report returned by `POST /api/audit`.
///
/// Decoded strictly at the network boundary: a body missing any of these
/// fields is rejected. Out-of-range scores and unparseable timestamps are
/// passed through untouched; presentation decides how to show them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub document_name: String,
    pub compliance_score: f64,
    pub issues: Vec<String>,
    pub passed_checks: Vec<String>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_type_wire_tags() {
        assert_eq!(DocType::Contract.as_str(), "contract");
        assert_eq!(DocType::Agreement.as_str(), "agreement");
        assert_eq!(DocType::Policy.as_str(), "policy");
        assert_eq!(DocType::Other.as_str(), "other");
        assert_eq!(DocType::default(), DocType::Contract);
    }

    #[test]
    fn test_doc_type_from_str_round_trip() {
        for doc_type in DocType::ALL {
            assert_eq!(doc_type.as_str().parse::<DocType>().unwrap(), doc_type);
        }
        assert!("invoice".parse::<DocType>().is_err());
        assert!("Contract".parse::<DocType>().is_err());
    }

    #[test]
    fn test_selected_document_only_holds_valid_files() {
        let doc =
            SelectedDocument::new("notes.txt", "text/plain", Bytes::from_static(b"hello")).unwrap();
        assert_eq!(doc.name(), "notes.txt");
        assert_eq!(doc.content_type(), "text/plain");
        assert_eq!(doc.size_bytes(), 5);

        let err = SelectedDocument::new("evil.exe", "application/x-msdownload", Bytes::new())
            .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_audit_report_decodes_camel_case() {
        let body = r#"{
            "documentName": "test.txt",
            "complianceScore": 95,
            "issues": [],
            "passedChecks": ["Clause A", "Clause B"],
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let report: AuditReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.document_name, "test.txt");
        assert_eq!(report.compliance_score, 95.0);
        assert!(report.issues.is_empty());
        assert_eq!(report.passed_checks.len(), 2);
    }

    #[test]
    fn test_audit_report_rejects_missing_fields() {
        let body = r#"{
            "documentName": "test.txt",
            "issues": [],
            "passedChecks": [],
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<AuditReport>(body).is_err());
    }

    #[test]
    fn test_audit_report_passes_through_out_of_range_score() {
        let body = r#"{
            "documentName": "odd.pdf",
            "complianceScore": 150,
            "issues": ["x"],
            "passedChecks": [],
            "timestamp": "not a date"
        }"#;
        let report: AuditReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.compliance_score, 150.0);
        assert_eq!(report.timestamp, "not a date");
    }
}
