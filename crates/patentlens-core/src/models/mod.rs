pub mod upload;

pub use upload::{UploadResponse, UploadedDocument};
