//! Route definitions for the HTTP API.

mod health;
mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document upload and extraction
        .route("/upload_resume", post(upload::upload_resume))
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use upload::*;
