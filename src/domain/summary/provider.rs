use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Supported AI text-generation services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "huggingface")]
    HuggingFace,
    Cohere,
}

impl ProviderKind {
    pub fn all() -> [ProviderKind; 3] {
        [Self::OpenAi, Self::HuggingFace, Self::Cohere]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::HuggingFace => "huggingface",
            Self::Cohere => "cohere",
        }
    }

    /// Human-readable service name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::HuggingFace => "HuggingFace",
            Self::Cohere => "Cohere",
        }
    }

    /// Whether the caller may pick the model per request
    pub fn accepts_model(&self) -> bool {
        matches!(self, Self::HuggingFace)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "huggingface" | "hugging_face" | "hf" => Ok(Self::HuggingFace),
            "cohere" => Ok(Self::Cohere),
            other => Err(DomainError::validation(format!(
                "Unknown provider '{}'. Expected one of: openai, huggingface, cohere",
                other
            ))),
        }
    }
}

/// Per-request provider selection and credential
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub credential: String,
    /// Model identifier; only honored by HuggingFace
    pub model: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: ProviderKind, credential: impl Into<String>) -> Self {
        Self {
            provider,
            credential: credential.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.model = if model.trim().is_empty() {
            None
        } else {
            Some(model)
        };
        self
    }

    /// Selected model, ignored for providers without a model choice
    pub fn selected_model(&self) -> Option<&str> {
        if !self.provider.accepts_model() {
            return None;
        }

        self.model.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("HuggingFace".parse::<ProviderKind>().unwrap(), ProviderKind::HuggingFace);
        assert_eq!(" Cohere ".parse::<ProviderKind>().unwrap(), ProviderKind::Cohere);
        assert!("anthropic".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_serialization() {
        assert_eq!(serde_json::to_string(&ProviderKind::OpenAi).unwrap(), "\"openai\"");
        assert_eq!(
            serde_json::to_string(&ProviderKind::HuggingFace).unwrap(),
            "\"huggingface\""
        );
        assert_eq!(serde_json::to_string(&ProviderKind::Cohere).unwrap(), "\"cohere\"");
    }

    #[test]
    fn test_selected_model_only_for_huggingface() {
        let hf = ProviderConfig::new(ProviderKind::HuggingFace, "hf_key")
            .with_model("google/pegasus-xsum");
        let openai = ProviderConfig::new(ProviderKind::OpenAi, "sk-key").with_model("gpt-4");

        assert_eq!(hf.selected_model(), Some("google/pegasus-xsum"));
        assert_eq!(openai.selected_model(), None);
    }

    #[test]
    fn test_blank_model_is_none() {
        let config = ProviderConfig::new(ProviderKind::HuggingFace, "hf_key").with_model("  ");
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ProviderConfig::new(ProviderKind::Cohere, "super-secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
