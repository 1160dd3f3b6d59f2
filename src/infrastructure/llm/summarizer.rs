//! Provider dispatch and error classification

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::config::SummarizationConfig;
use crate::domain::{
    PromptTemplate, ProviderAdapter, ProviderConfig, ProviderKind, SummaryError, SummaryResult,
};

use super::factory::ProviderAdapterFactory;
use super::http_client::{HttpClient, HttpClientTrait};

/// Sends extracted text to the selected AI provider and normalizes the reply
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: Arc<dyn HttpClientTrait>,
    prompt: PromptTemplate,
    adapters: HashMap<ProviderKind, Arc<dyn ProviderAdapter>>,
}

impl Summarizer {
    pub fn new(
        client: Arc<dyn HttpClientTrait>,
        prompt: PromptTemplate,
        adapters: HashMap<ProviderKind, Arc<dyn ProviderAdapter>>,
    ) -> Self {
        Self {
            client,
            prompt,
            adapters,
        }
    }

    pub fn from_config(config: &SummarizationConfig) -> Self {
        Self::with_client(Arc::new(HttpClient::new()), config)
    }

    pub fn with_client(client: Arc<dyn HttpClientTrait>, config: &SummarizationConfig) -> Self {
        let prompt = PromptTemplate::new(
            config.language.clone(),
            config.max_words,
            config.max_input_chars,
        );

        Self::new(client, prompt, ProviderAdapterFactory::create_all(config))
    }

    /// Summarize `text` extracted from `filename` with the given provider
    ///
    /// Without a provider or credential no request is made.
    #[tracing::instrument(
        skip(self, text, config),
        fields(provider = config.map(|c| c.provider.as_str()).unwrap_or("none"), chars = text.len())
    )]
    pub async fn summarize(
        &self,
        text: &str,
        filename: &str,
        config: Option<&ProviderConfig>,
    ) -> SummaryResult {
        let config = config.ok_or_else(|| SummaryError::not_configured("no provider selected"))?;

        if !config.has_credential() {
            return Err(SummaryError::not_configured(format!(
                "missing API key for {}",
                config.provider
            )));
        }

        let adapter = self.adapters.get(&config.provider).ok_or_else(|| {
            SummaryError::not_configured(format!("{} is not enabled", config.provider))
        })?;

        let prompt = self.prompt.render(filename, text);
        self.dispatch(adapter.as_ref(), &prompt, config).await
    }

    async fn dispatch(
        &self,
        adapter: &dyn ProviderAdapter,
        prompt: &str,
        config: &ProviderConfig,
    ) -> SummaryResult {
        let provider = adapter.kind();
        let url = adapter.endpoint(config);
        let body = adapter.build_body(prompt, config);
        let started = Instant::now();

        tracing::debug!(endpoint = %url, "Sending summarization request");

        let response = self
            .client
            .post_json(&url, &adapter.headers(config), &body, adapter.timeout())
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %url, error = %e, "Provider unreachable");
                SummaryError::connection(provider, e.to_string())
            })?;

        let latency_ms = started.elapsed().as_millis() as u64;
        tracing::info!(endpoint = %url, status = response.status, latency_ms, "Provider responded");

        if let Some(error) = adapter.classify_status(response.status, &response.body) {
            return Err(error);
        }

        if !response.is_success() {
            return Err(SummaryError::http(provider, response.status, &response.body));
        }

        let json: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            SummaryError::schema(provider, format!("response is not JSON: {}", e))
        })?;

        let summary = adapter.extract_summary(&json).ok_or_else(|| {
            SummaryError::schema(
                provider,
                format!("missing field {}", adapter.summary_path()),
            )
        })?;

        Ok(summary.trim().to_string())
    }
}
