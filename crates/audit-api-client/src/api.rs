//! Domain methods for the audit service client.
//!
//! Wire types live in `audit_core::models`; this module owns request
//! construction and the response decode at the boundary. Non-2xx responses
//! become `AuditError::Service` with the service's reported `error` field
//! when present; transport failures name the endpoint that was expected to
//! answer.

use std::io::Read;
use std::path::{Component, Path};

use anyhow::Context;
use async_trait::async_trait;
use audit_core::models::{
    AuditReport, BatchAuditResponse, DocType, HealthResponse, SelectedDocument, ServiceStats,
};
use audit_core::validation::content_type_for_extension;
use audit_core::workflow::AuditBackend;
use audit_core::AuditError;
use bytes::Bytes;
use reqwest::multipart;
use serde::de::DeserializeOwned;

use crate::{ApiClient, API_PREFIX};

impl ApiClient {
    /// Submit one document for audit (`POST /api/audit`).
    ///
    /// Multipart body: part `file` = document bytes with the original
    /// filename, text field `docType` = the wire tag.
    pub async fn run_audit(
        &self,
        document: &SelectedDocument,
        doc_type: DocType,
    ) -> Result<AuditReport, AuditError> {
        let url = self.build_url(&format!("{}/audit", API_PREFIX));
        tracing::debug!(%url, document = %document.name(), "sending audit request");

        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(document.bytes().to_vec())
                    .file_name(document.name().to_string()),
            )
            .text("docType", doc_type.as_str());

        let response = self
            .client()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| AuditError::Transport {
                endpoint: url.clone(),
                source: err.into(),
            })?;

        decode_json(&url, response).await
    }

    /// Submit several documents at once (`POST /api/batch-audit`), one
    /// `files` part per document.
    pub async fn run_batch_audit(
        &self,
        documents: &[SelectedDocument],
        doc_type: DocType,
    ) -> Result<BatchAuditResponse, AuditError> {
        let url = self.build_url(&format!("{}/batch-audit", API_PREFIX));

        let mut form = multipart::Form::new().text("docType", doc_type.as_str());
        for document in documents {
            form = form.part(
                "files",
                multipart::Part::bytes(document.bytes().to_vec())
                    .file_name(document.name().to_string()),
            );
        }

        let response = self
            .client()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| AuditError::Transport {
                endpoint: url.clone(),
                source: err.into(),
            })?;

        decode_json(&url, response).await
    }

    /// Service health check (`GET /api/health`).
    pub async fn health(&self) -> Result<HealthResponse, AuditError> {
        self.get_json(&format!("{}/health", API_PREFIX)).await
    }

    /// Service statistics (`GET /api/stats`).
    pub async fn stats(&self) -> Result<ServiceStats, AuditError> {
        self.get_json(&format!("{}/stats", API_PREFIX)).await
    }

    /// Read a local file into a validated document, inferring the content
    /// type from the filename extension.
    pub fn read_document(path: &Path) -> anyhow::Result<SelectedDocument> {
        if path.components().any(|c| c == Component::ParentDir) {
            anyhow::bail!("Invalid input: {}", path.display());
        }
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content_type = content_type_for_extension(extension);

        Ok(SelectedDocument::new(name, content_type, Bytes::from(buffer))?)
    }

    /// Convenience: read, validate, and audit a file from disk.
    pub async fn submit_file(&self, path: &Path, doc_type: DocType) -> anyhow::Result<AuditReport> {
        let document = Self::read_document(path)?;
        Ok(self.run_audit(&document, doc_type).await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AuditError> {
        let url = self.build_url(path);
        let response = self
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|err| AuditError::Transport {
                endpoint: url.clone(),
                source: err.into(),
            })?;

        decode_json(&url, response).await
    }
}

/// Decode a response at the boundary. Any non-2xx status is a failure
/// regardless of body shape; a 2xx body that does not match the expected
/// type is rejected, not passed through.
async fn decode_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, AuditError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Failed to process document".to_string());
        return Err(AuditError::Service {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| AuditError::Transport {
            endpoint: url.to_string(),
            source: err.into(),
        })?;
    serde_json::from_slice(&body).map_err(|err| AuditError::MalformedResponse(err.to_string()))
}

#[async_trait]
impl AuditBackend for ApiClient {
    async fn run_audit(
        &self,
        document: &SelectedDocument,
        doc_type: DocType,
    ) -> Result<AuditReport, AuditError> {
        ApiClient::run_audit(self, document, doc_type).await
    }
}
