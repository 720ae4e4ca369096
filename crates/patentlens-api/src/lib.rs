//! PatentLens API server library.
//!
//! Exposes the router construction and application state so integration tests
//! can drive the server in-process; the binary in `main.rs` is a thin wrapper
//! around [`setup::initialize_app`].

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use state::AppState;
