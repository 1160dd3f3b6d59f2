//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::DocumentPipeline;

/// Shared by every handler; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DocumentPipeline>,
}

impl AppState {
    pub fn new(pipeline: DocumentPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
