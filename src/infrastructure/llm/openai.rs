use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::OpenAiSettings;
use crate::domain::{ProviderAdapter, ProviderConfig, ProviderKind};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat completions adapter
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiAdapter {
    pub fn new(temperature: f32) -> Self {
        Self::with_base_url(DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, temperature)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn from_settings(settings: &OpenAiSettings, temperature: f32) -> Self {
        Self::with_base_url(&settings.base_url, &settings.model, temperature)
            .with_timeout(Duration::from_secs(settings.timeout_secs))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn endpoint(&self, _config: &ProviderConfig) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_body(&self, prompt: &str, _config: &ProviderConfig) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [OpenAiMessage { role: "user", content: prompt }],
            "temperature": self.temperature,
        })
    }

    fn extract_summary(&self, body: &serde_json::Value) -> Option<String> {
        let response: OpenAiResponse = serde_json::from_value(body.clone()).ok()?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }

    fn summary_path(&self) -> &'static str {
        "choices[0].message.content"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}
