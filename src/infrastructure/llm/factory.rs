use std::collections::HashMap;
use std::sync::Arc;

use super::{CohereAdapter, HuggingFaceAdapter, OpenAiAdapter};
use crate::config::SummarizationConfig;
use crate::domain::{ProviderAdapter, ProviderKind};

/// Factory for creating provider adapters
#[derive(Debug)]
pub struct ProviderAdapterFactory;

impl ProviderAdapterFactory {
    /// Create the adapter for one provider from configuration
    pub fn create(kind: ProviderKind, config: &SummarizationConfig) -> Arc<dyn ProviderAdapter> {
        match kind {
            ProviderKind::OpenAi => Arc::new(OpenAiAdapter::from_settings(
                &config.openai,
                config.temperature,
            )),
            ProviderKind::HuggingFace => Arc::new(HuggingFaceAdapter::from_settings(
                &config.huggingface,
                config.temperature,
            )),
            ProviderKind::Cohere => Arc::new(CohereAdapter::from_settings(
                &config.cohere,
                config.temperature,
            )),
        }
    }

    /// One adapter per supported provider
    pub fn create_all(
        config: &SummarizationConfig,
    ) -> HashMap<ProviderKind, Arc<dyn ProviderAdapter>> {
        ProviderKind::all()
            .into_iter()
            .map(|kind| (kind, Self::create(kind, config)))
            .collect()
    }
}
