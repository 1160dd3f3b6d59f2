use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub summarization: SummarizationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings for the text-layer and OCR extraction paths
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Tesseract language models, joined with `+`
    pub ocr_languages: String,
    pub ocr_dpi: u32,
    /// Directory holding the `.traineddata` files; tesseract's default when unset
    pub tessdata_path: Option<String>,
    /// Directory containing the pdfium shared library; system search path when unset
    pub pdfium_library_path: Option<String>,
    pub max_ocr_pages: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizationConfig {
    pub language: String,
    pub max_words: usize,
    pub max_input_chars: usize,
    pub temperature: f32,
    pub openai: OpenAiSettings,
    pub huggingface: HuggingFaceSettings,
    pub cohere: CohereSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HuggingFaceSettings {
    pub base_url: String,
    pub default_model: String,
    pub max_length: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CohereSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ocr_languages: "por+eng".to_string(),
            ocr_dpi: 300,
            tessdata_path: None,
            pdfium_library_path: None,
            max_ocr_pages: 200,
        }
    }
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            language: "português".to_string(),
            max_words: 300,
            max_input_chars: 12_000,
            temperature: 0.3,
            openai: OpenAiSettings::default(),
            huggingface: HuggingFaceSettings::default(),
            cohere: CohereSettings::default(),
        }
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for HuggingFaceSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            default_model: "facebook/bart-large-cnn".to_string(),
            max_length: 512,
            timeout_secs: 120,
        }
    }
}

impl Default for CohereSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.cohere.ai".to_string(),
            model: "command".to_string(),
            max_tokens: 600,
            timeout_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.extraction.ocr_languages, "por+eng");
        assert_eq!(config.extraction.ocr_dpi, 300);
        assert_eq!(config.summarization.huggingface.timeout_secs, 120);
        assert_eq!(
            config.summarization.huggingface.default_model,
            "facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 9090)
            .unwrap()
            .set_override("summarization.openai.model", "gpt-4o")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.summarization.openai.model, "gpt-4o");
        assert_eq!(config.summarization.openai.timeout_secs, 60);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_deserialization() {
        let config: AppConfig = config::Config::builder()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
