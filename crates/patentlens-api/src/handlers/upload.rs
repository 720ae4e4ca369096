use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use patentlens_core::models::{UploadResponse, UploadedDocument};
use patentlens_core::sanitize_filename;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file, oversized file, or unsupported type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_document"))]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // Validation order is part of the contract: presence, then size, then type.
    let (data, original_name, content_type) = extract_multipart_file(multipart).await?;

    state.validator.validate_file_size(data.len())?;
    state.validator.validate_content_type(&content_type)?;

    let file_id = state.upload_ids.next_id();
    let file_name = format!("{}_{}", file_id, sanitize_filename(&original_name));

    let stored = state.store.put(&file_name, data).await?;

    let document = UploadedDocument {
        file_id,
        original_name,
        file_name: stored.name,
        size: stored.size,
        content_type,
        upload_time: Utc::now(),
    };

    tracing::info!(
        original_name = %document.original_name,
        file_name = %document.file_name,
        size_bytes = document.size,
        content_type = %document.content_type,
        "File uploaded"
    );

    Ok(Json(UploadResponse::from(document)))
}
