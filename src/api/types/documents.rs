use serde::{Deserialize, Serialize};

use crate::domain::{DocumentFormat, ExtractionStatus, ProviderKind};

/// Response of `POST /v1/extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub format: DocumentFormat,
    pub status: ExtractionStatus,
    pub text: String,
}

/// Response of `POST /v1/summarize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub id: String,
    pub filename: String,
    pub status: ExtractionStatus,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: ProviderKind,
    pub name: String,
    /// Whether the `model` form field is honored
    pub model_selectable: bool,
}

impl ProviderInfo {
    pub fn from_domain(kind: ProviderKind) -> Self {
        Self {
            id: kind,
            name: kind.display_name().to_string(),
            model_selectable: kind.accepts_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub object: String,
    pub data: Vec<ProviderInfo>,
}

impl ProvidersResponse {
    pub fn new(data: Vec<ProviderInfo>) -> Self {
        Self {
            object: "list".to_string(),
            data,
        }
    }
}
