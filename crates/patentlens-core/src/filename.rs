//! Filename sanitization and upload-id generation.
//!
//! Stored names have the form `<upload_id>_<sanitized-original-name>`. The
//! sanitized part keeps ASCII alphanumerics plus `.`, `-` and `_`, replaces
//! everything else with `_`, and folds to lowercase, so the result is always a
//! single flat path component. The upload id is the unix millisecond clock
//! extended with a process-wide counter so two requests landing in the same
//! millisecond still get distinct names.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Longest accepted sanitized name; longer names are truncated from the front
/// so the extension survives.
const MAX_FILENAME_LENGTH: usize = 255;

/// Sanitize a user-supplied filename into a safe on-disk form.
///
/// Any path prefix is discarded first, then disallowed characters are replaced
/// with `_` and the result is lowercased. An empty input becomes `"unnamed"`.
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        return "unnamed".to_string();
    }

    if sanitized.len() > MAX_FILENAME_LENGTH {
        let start = sanitized.len() - MAX_FILENAME_LENGTH;
        sanitized[start..].to_string()
    } else {
        sanitized
    }
}

/// Generator for digits-only upload ids: `<unix_millis><3-digit counter>`.
///
/// Ids are monotonic within a process and unique even for requests served in
/// the same millisecond (up to 1000 per millisecond). They are not globally
/// unique across processes sharing an upload directory.
#[derive(Debug, Default)]
pub struct UploadIdGenerator {
    counter: AtomicU64,
}

impl UploadIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next upload id. The counter wraps at 1000, which keeps the id width
    /// stable and still disambiguates concurrent same-millisecond requests.
    pub fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) % 1000;
        format!("{}{:03}", millis, seq)
    }
}
