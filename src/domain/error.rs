use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Extraction error: {format} - {message}")]
    Extraction { format: String, message: String },

    #[error("OCR error: {message}")]
    Ocr { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn extraction(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn ocr(message: impl Into<String>) -> Self {
        Self::Ocr {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
