use std::time::Duration;

use serde::Deserialize;

use crate::config::CohereSettings;
use crate::domain::{ProviderAdapter, ProviderConfig, ProviderKind};

const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai";
const DEFAULT_COHERE_MODEL: &str = "command";
const DEFAULT_MAX_TOKENS: u32 = 600;

/// Cohere generate adapter
#[derive(Debug, Clone)]
pub struct CohereAdapter {
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl CohereAdapter {
    pub fn new(temperature: f32) -> Self {
        Self::with_base_url(DEFAULT_COHERE_BASE_URL, DEFAULT_COHERE_MODEL, temperature)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn from_settings(settings: &CohereSettings, temperature: f32) -> Self {
        let mut adapter = Self::with_base_url(&settings.base_url, &settings.model, temperature);
        adapter.max_tokens = settings.max_tokens;
        adapter.timeout = Duration::from_secs(settings.timeout_secs);
        adapter
    }
}

impl ProviderAdapter for CohereAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Cohere
    }

    fn endpoint(&self, _config: &ProviderConfig) -> String {
        format!("{}/v1/generate", self.base_url)
    }

    fn build_body(&self, prompt: &str, _config: &ProviderConfig) -> serde_json::Value {
        serde_json::json!({
            "prompt": prompt,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "model": self.model,
        })
    }

    fn extract_summary(&self, body: &serde_json::Value) -> Option<String> {
        let response: CohereResponse = serde_json::from_value(body.clone()).ok()?;

        response
            .generations
            .into_iter()
            .next()
            .map(|generation| generation.text)
    }

    fn summary_path(&self) -> &'static str {
        "generations[0].text"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Cohere API types

#[derive(Debug, Deserialize)]
struct CohereResponse {
    generations: Vec<CohereGeneration>,
}

#[derive(Debug, Deserialize)]
struct CohereGeneration {
    text: String,
}
