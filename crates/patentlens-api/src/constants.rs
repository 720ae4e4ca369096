//! API-level constants.

/// Path of the upload endpoint.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Headroom added to the upload ceiling for multipart framing (boundaries,
/// part headers) when sizing the request body limit. The 10 MiB ceiling on the
/// file itself is enforced in the handler with a 400, not by this layer.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;
