//! Layered application configuration (files, then `APP__` environment variables)

mod app_config;

pub use app_config::{
    AppConfig, CohereSettings, ExtractionConfig, HuggingFaceSettings, LogFormat, LoggingConfig,
    OpenAiSettings, ServerConfig, SummarizationConfig,
};
