use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use patentlens_api::setup::routes::setup_routes;
use patentlens_api::AppState;
use patentlens_core::Config;
use patentlens_storage::{
    DocumentStore, LocalDocumentStore, MemoryDocumentStore, StorageError, StorageResult,
    StoredObject,
};

fn test_server(store: Arc<dyn DocumentStore>) -> TestServer {
    let config = Config::default();
    let state = Arc::new(AppState::new(config.clone(), store));
    let router = setup_routes(&config, state).unwrap();
    TestServer::new(router).unwrap()
}

fn pdf_form(name: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data)
            .file_name(name.to_string())
            .mime_type("application/pdf"),
    )
}

#[tokio::test]
async fn missing_file_part_returns_400() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let form = MultipartForm::new().add_text("note", "no file here");
    let response = server.post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No file was uploaded.");
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn oversized_file_returns_400_and_writes_nothing() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let data = vec![0u8; 10 * 1024 * 1024 + 1];
    let response = server
        .post("/api/upload")
        .multipart(pdf_form("big.pdf", data))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "File is too large. Please upload a file of 10 MB or less."
    );
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn file_at_exact_ceiling_is_accepted() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let data = vec![0u8; 10 * 1024 * 1024];
    let response = server
        .post("/api/upload")
        .multipart(pdf_form("exact.pdf", data))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["size"], 10 * 1024 * 1024);
}

#[tokio::test]
async fn disallowed_content_type_returns_400_and_writes_nothing() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0u8; 100])
            .file_name("image.png")
            .mime_type("image/png"),
    );
    let response = server.post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "Unsupported file type. Please upload a PDF, TXT, DOC, or DOCX file."
    );
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn content_type_with_parameters_is_accepted() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"plain text".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain; charset=utf-8"),
    );
    let response = server.post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn valid_pdf_is_stored_under_sanitized_prefixed_name() {
    let temp = tempfile::TempDir::new().unwrap();
    let upload_dir = temp.path().join("uploads");
    let store = Arc::new(LocalDocumentStore::new(&upload_dir));
    let server = test_server(store.clone());

    let data = vec![42u8; 1536];
    let response = server
        .post("/api/upload")
        .multipart(pdf_form("My Patent #1.pdf", data.clone()))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["originalName"], "My Patent #1.pdf");
    assert_eq!(body["size"], 1536);
    assert_eq!(body["type"], "application/pdf");
    assert!(body["uploadTime"].is_string());
    assert!(body["message"].as_str().unwrap().contains("uploaded"));

    // fileName is <digits>_my_patent__1.pdf
    let file_name = body["fileName"].as_str().unwrap();
    let (prefix, rest) = file_name.split_once('_').unwrap();
    assert!(!prefix.is_empty());
    assert!(prefix.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(rest, "my_patent__1.pdf");
    assert_eq!(body["fileId"], prefix);

    // exactly S bytes on disk at that path
    let on_disk = std::fs::read(upload_dir.join(file_name)).unwrap();
    assert_eq!(on_disk, data);
}

#[tokio::test]
async fn repeated_uploads_of_same_name_get_distinct_stored_names() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let first: serde_json::Value = server
        .post("/api/upload")
        .multipart(pdf_form("dup.pdf", vec![1u8; 10]))
        .await
        .json();
    let second: serde_json::Value = server
        .post("/api/upload")
        .multipart(pdf_form("dup.pdf", vec![2u8; 10]))
        .await
        .json();

    assert_ne!(first["fileName"], second["fileName"]);
    assert_ne!(first["fileId"], second["fileId"]);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn multiple_file_fields_are_rejected() {
    let store = Arc::new(MemoryDocumentStore::new());
    let server = test_server(store.clone());

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(vec![1u8; 4])
                .file_name("a.pdf")
                .mime_type("application/pdf"),
        )
        .add_part(
            "file",
            Part::bytes(vec![2u8; 4])
                .file_name("b.pdf")
                .mime_type("application/pdf"),
        );
    let response = server.post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(store.count().await.unwrap(), 0);
}

/// Store stub whose writes always fail, for exercising the 500 path.
#[derive(Debug)]
struct BrokenStore;

#[async_trait::async_trait]
impl DocumentStore for BrokenStore {
    async fn put(&self, _name: &str, _data: Vec<u8>) -> StorageResult<StoredObject> {
        Err(StorageError::WriteFailed("simulated disk failure".into()))
    }

    async fn get(&self, name: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::NotFound(name.to_string()))
    }

    async fn exists(&self, _name: &str) -> StorageResult<bool> {
        Ok(false)
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(0)
    }
}

#[tokio::test]
async fn storage_failure_returns_opaque_500() {
    let server = test_server(Arc::new(BrokenStore));

    let response = server
        .post("/api/upload")
        .multipart(pdf_form("doc.pdf", vec![0u8; 16]))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "An error occurred while uploading the file.");
    assert!(!body["error"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn health_reports_storage_status() {
    let server = test_server(Arc::new(MemoryDocumentStore::new()));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
}
