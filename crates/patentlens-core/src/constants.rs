//! Shared constants for upload validation and storage.

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted by the upload endpoint (compared case-insensitively,
/// with any `;`-separated parameters stripped first).
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = [
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// File extensions matching the allowed content types. Used by clients to guess
/// a MIME type from a local path; the server validates the declared type only.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "txt", "doc", "docx"];

/// Default directory for stored uploads, relative to the working directory.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
