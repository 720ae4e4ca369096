//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use patentlens_core::Config;
use std::sync::Arc;

/// Initialize the entire application: storage, shared state, and routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let store = storage::setup_storage(&config);

    let state = Arc::new(AppState::new(config.clone(), store));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
