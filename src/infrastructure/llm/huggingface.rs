use std::time::Duration;

use serde::Deserialize;

use crate::config::HuggingFaceSettings;
use crate::domain::{ProviderAdapter, ProviderConfig, ProviderKind, SummaryError};

const DEFAULT_HUGGINGFACE_BASE_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_HUGGINGFACE_MODEL: &str = "facebook/bart-large-cnn";
const DEFAULT_MAX_LENGTH: u32 = 512;

/// HuggingFace Inference API adapter
///
/// The endpoint is the base URL followed by the model identifier, so the
/// caller's model choice selects the deployment.
#[derive(Debug, Clone)]
pub struct HuggingFaceAdapter {
    base_url: String,
    default_model: String,
    max_length: u32,
    temperature: f32,
    timeout: Duration,
}

impl HuggingFaceAdapter {
    pub fn new(temperature: f32) -> Self {
        Self::with_base_url(
            DEFAULT_HUGGINGFACE_BASE_URL,
            DEFAULT_HUGGINGFACE_MODEL,
            temperature,
        )
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        default_model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_model: default_model.into(),
            max_length: DEFAULT_MAX_LENGTH,
            temperature,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn from_settings(settings: &HuggingFaceSettings, temperature: f32) -> Self {
        let mut adapter =
            Self::with_base_url(&settings.base_url, &settings.default_model, temperature);
        adapter.max_length = settings.max_length;
        adapter.timeout = Duration::from_secs(settings.timeout_secs);
        adapter
    }

    fn model<'a>(&'a self, config: &'a ProviderConfig) -> &'a str {
        config.selected_model().unwrap_or(&self.default_model)
    }
}

impl ProviderAdapter for HuggingFaceAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    fn endpoint(&self, config: &ProviderConfig) -> String {
        format!("{}/{}", self.base_url, self.model(config))
    }

    fn build_body(&self, prompt: &str, _config: &ProviderConfig) -> serde_json::Value {
        serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_length": self.max_length,
                "temperature": self.temperature,
                "do_sample": false,
            },
        })
    }

    fn extract_summary(&self, body: &serde_json::Value) -> Option<String> {
        let outputs: Vec<HuggingFaceOutput> = serde_json::from_value(body.clone()).ok()?;
        let first = outputs.into_iter().next()?;

        // Summarization pipelines answer with `summary_text` instead of `generated_text`.
        first.generated_text.or(first.summary_text)
    }

    fn summary_path(&self) -> &'static str {
        "[0].generated_text"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify_status(&self, status: u16, body: &str) -> Option<SummaryError> {
        if status != 503 {
            return None;
        }

        let detail = serde_json::from_str::<HuggingFaceLoading>(body)
            .ok()
            .map(|loading| match loading.estimated_time {
                Some(seconds) => format!("{} (estimated {:.0}s)", loading.error, seconds),
                None => loading.error,
            })
            .unwrap_or_else(|| "model is loading".to_string());

        Some(SummaryError::cold_start(ProviderKind::HuggingFace, detail))
    }
}

// HuggingFace API types

#[derive(Debug, Deserialize)]
struct HuggingFaceOutput {
    generated_text: Option<String>,
    summary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HuggingFaceLoading {
    error: String,
    estimated_time: Option<f64>,
}
