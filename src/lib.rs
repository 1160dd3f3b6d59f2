//! Document Summarizer
//!
//! Turns uploaded documents into a short AI-generated summary:
//! - Text extraction from PDF (text layer with OCR fallback), DOCX and spreadsheets
//! - One prompt dispatched to OpenAI, HuggingFace or Cohere
//! - Classified provider errors with user-facing messages

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::services::DocumentPipeline;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    tracing::info!(
        ocr_languages = %config.extraction.ocr_languages,
        ocr_dpi = config.extraction.ocr_dpi,
        "Building document pipeline"
    );

    AppState::new(DocumentPipeline::from_config(config))
}
