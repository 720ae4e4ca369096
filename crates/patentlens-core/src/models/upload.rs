use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored upload, as known to the server immediately after persisting it.
///
/// Nothing indexes uploads beyond the response returned to the caller; this is
/// a transient, per-request record, not a database row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedDocument {
    /// Digits-only id derived from the ingestion timestamp.
    pub file_id: String,
    /// User-supplied name, untrusted, echoed verbatim.
    pub original_name: String,
    /// Sanitized, id-prefixed on-disk name.
    pub file_name: String,
    /// Bytes actually persisted, taken from the stored object.
    pub size: u64,
    /// Client-declared MIME type. Not verified against file content.
    pub content_type: String,
    /// Server-side completion time.
    pub upload_time: DateTime<Utc>,
}

/// Wire format for a successful `POST /api/upload` response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: String,
    pub original_name: String,
    pub file_name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub upload_time: DateTime<Utc>,
    pub message: String,
}

impl From<UploadedDocument> for UploadResponse {
    fn from(doc: UploadedDocument) -> Self {
        UploadResponse {
            success: true,
            file_id: doc.file_id,
            original_name: doc.original_name,
            file_name: doc.file_name,
            size: doc.size,
            content_type: doc.content_type,
            upload_time: doc.upload_time,
            message: "File uploaded successfully.".to_string(),
        }
    }
}
