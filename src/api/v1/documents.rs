//! Document extraction and summarization handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, DocumentUpload, ExtractResponse, SummarizeResponse};

/// POST /v1/extract
pub async fn extract_document(
    State(state): State<AppState>,
    upload: DocumentUpload,
) -> Result<Json<ExtractResponse>, ApiError> {
    info!(filename = %upload.filename, bytes = upload.bytes.len(), "Processing extract request");

    let DocumentUpload {
        filename, bytes, ..
    } = upload;
    let (format, extracted) = state.pipeline.extract(bytes, &filename).await;

    Ok(Json(ExtractResponse {
        filename,
        format,
        status: extracted.status,
        text: extracted.content,
    }))
}

/// POST /v1/summarize
pub async fn summarize_document(
    State(state): State<AppState>,
    upload: DocumentUpload,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let config = upload.provider_config()?;

    info!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        provider = config.as_ref().map(|c| c.provider.as_str()).unwrap_or("none"),
        "Processing summarize request"
    );

    let DocumentUpload {
        filename, bytes, ..
    } = upload;
    let output = state
        .pipeline
        .process(bytes, &filename, config.as_ref())
        .await;

    let summary = output.summary.map_err(ApiError::from)?;

    Ok(Json(SummarizeResponse {
        id: output.run_id.to_string(),
        filename: output.filename,
        status: output.extracted.status,
        summary,
    }))
}
