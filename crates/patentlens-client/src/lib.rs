//! HTTP client for the PatentLens API.
//!
//! Provides a minimal client with a multipart upload helper, the
//! [`UploadForm`] state machine mirroring the upload page's behavior
//! (select, submit, busy flag, success/error state), and the
//! [`format_size`] presentation helper. The CLI drives this client directly.

pub mod form;
pub mod format;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use patentlens_core::models::UploadResponse;
use reqwest::Client;

/// Errors surfaced by the client, split by how the form reports them:
/// a server rejection carries the server's message, everything else is generic.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status and (possibly) a message.
    #[error("{0}")]
    Rejected(String),

    /// No usable response: connect failure, timeout, or an unreadable body.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The selected file could not be read before the request went out.
    #[error("{0}")]
    File(String),
}

impl ClientError {
    /// The message shown to the user, matching the upload page's wording.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected(msg) => msg.clone(),
            ClientError::Network(_) => "A network error occurred.".to_string(),
            ClientError::File(msg) => msg.clone(),
        }
    }
}

/// HTTP client for the PatentLens API.
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

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: PATENTLENS_API_URL (or API_URL),
    /// defaulting to the local development server.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PATENTLENS_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a document from a local file path via `POST /api/upload`.
    ///
    /// The MIME type is guessed from the file extension; the server validates
    /// the declared type against its allow-list.
    pub async fn upload_document(&self, file_path: &Path) -> Result<UploadResponse, ClientError> {
        let buffer = tokio::fs::read(file_path)
            .await
            .map_err(|e| ClientError::File(format!("Failed to read file {}: {}", file_path.display(), e)))?;

        let filename = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        let part = reqwest::multipart::Part::bytes(buffer)
            .file_name(filename.clone())
            .mime_str(guess_content_type(&filename))
            .map_err(|e| ClientError::File(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server's `{ "error": ... }` message, fall back generically.
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| "Upload failed.".to_string());
            return Err(ClientError::Rejected(message));
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(ClientError::Network)
    }
}

/// Guess a MIME type from the file extension. Unknown extensions fall through
/// to octet-stream, which the server rejects with its unsupported-type message.
pub fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

pub use form::UploadForm;
pub use format::format_size;
