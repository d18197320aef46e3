//! Wire models for the audit service's auxiliary endpoints.

use serde::{Deserialize, Serialize};

use super::audit::AuditReport;

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// `GET /api/stats` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStats {
    pub total_audits: i64,
    pub average_score: f64,
    pub supported_formats: Vec<String>,
    pub max_file_size_mb: f64,
}

/// `POST /api/batch-audit` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAuditResponse {
    pub results: Vec<BatchAuditEntry>,
}

/// One entry per submitted file: either a full report or a per-file failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchAuditEntry {
    Report(AuditReport),
    Failed {
        filename: String,
        error: String,
        score: f64,
    },
}
