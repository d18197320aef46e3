//! HTTP client for the document compliance audit service.
//!
//! Provides a minimal client with the audit submission call (multipart
//! upload), the auxiliary health/stats endpoints, and batch submission.
//! The CLI uses this client directly; it also implements
//! `audit_core::AuditBackend` so the submission workflow can drive it.

pub mod api;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

/// Fixed API prefix; the audit service mounts everything under `/api`.
pub const API_PREFIX: &str = "/api";

/// HTTP client for the audit service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: AUDIT_API_URL (or API_URL),
    /// defaulting to the local development service.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("AUDIT_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
