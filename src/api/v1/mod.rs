//! v1 API endpoints

pub mod documents;
pub mod providers;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/providers", get(providers::list_providers))
        .route("/extract", post(documents::extract_document))
        .route("/summarize", post(documents::summarize_document))
}
