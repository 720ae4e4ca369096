//! Upload form state machine.
//!
//! Mirrors the upload page: one selected file, a busy flag while the request
//! is in flight, and mutually exclusive success/error outcome state. A failed
//! submit keeps the selection so the user can resubmit; success clears it.

use std::path::{Path, PathBuf};

use patentlens_core::models::UploadResponse;

use crate::ApiClient;

/// State of the upload form.
#[derive(Debug)]
pub struct UploadForm {
    client: ApiClient,
    selected: Option<PathBuf>,
    busy: bool,
    result: Option<UploadResponse>,
    error: Option<String>,
}

impl UploadForm {
    pub fn new(client: ApiClient) -> Self {
        UploadForm {
            client,
            selected: None,
            busy: false,
            result: None,
            error: None,
        }
    }

    /// Record a file selection and clear any prior outcome. Only existence is
    /// checked at this stage; size and type are validated server-side.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.error = None;
        self.result = None;

        if path.exists() {
            self.selected = Some(path);
        } else {
            self.selected = None;
            self.error = Some(format!("File not found: {}", path.display()));
        }
    }

    /// Submit the selected file. Fails fast when nothing is selected. The busy
    /// flag clears on every path, and the selection survives failures.
    pub async fn submit(&mut self) {
        let Some(path) = self.selected.clone() else {
            self.error = Some("Please select a file.".to_string());
            return;
        };

        self.busy = true;
        self.error = None;

        let outcome = self.client.upload_document(&path).await;
        self.busy = false;

        match outcome {
            Ok(response) => {
                tracing::debug!(file_name = %response.file_name, "Upload accepted");
                self.result = Some(response);
                self.selected = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn result(&self) -> Option<&UploadResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
