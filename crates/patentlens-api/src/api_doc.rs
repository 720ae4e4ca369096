//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use patentlens_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PatentLens API",
        version = "0.1.0",
        description = "Upload endpoint for patent documents (PDF, TXT, DOC, DOCX; 10 MB max). Accepted files are stored for later AI analysis."
    ),
    paths(
        handlers::upload::upload_document,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadResponse,
        error::ErrorResponse,
        handlers::health::HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
