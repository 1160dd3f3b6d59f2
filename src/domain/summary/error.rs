use thiserror::Error;

use super::ProviderKind;

/// Maximum number of response body characters carried by an HTTP error
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Outcome of a summarization request
pub type SummaryResult = Result<String, SummaryError>;

/// Classified summarization failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("AI service not configured: {reason}")]
    NotConfigured { reason: String },

    #[error("{provider} model is loading: {message}")]
    ColdStart {
        provider: ProviderKind,
        message: String,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Http {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("Failed to connect to {provider}: {message}")]
    Connection {
        provider: ProviderKind,
        message: String,
    },

    #[error("Unexpected response from {provider}: {message}")]
    Schema {
        provider: ProviderKind,
        message: String,
    },
}

impl SummaryError {
    pub fn not_configured(reason: impl Into<String>) -> Self {
        Self::NotConfigured {
            reason: reason.into(),
        }
    }

    pub fn cold_start(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::ColdStart {
            provider,
            message: message.into(),
        }
    }

    pub fn http(provider: ProviderKind, status: u16, body: &str) -> Self {
        Self::Http {
            provider,
            status,
            body: truncate_body(body),
        }
    }

    pub fn connection(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Connection {
            provider,
            message: message.into(),
        }
    }

    pub fn schema(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Schema {
            provider,
            message: message.into(),
        }
    }

    /// Stable machine-readable identifier of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } => "provider_not_configured",
            Self::ColdStart { .. } => "provider_cold_start",
            Self::Http { .. } => "provider_http_error",
            Self::Connection { .. } => "provider_connection_error",
            Self::Schema { .. } => "provider_schema_error",
        }
    }

    /// Whether retrying the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ColdStart { .. } | Self::Connection { .. } => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            Self::NotConfigured { .. } | Self::Schema { .. } => false,
        }
    }

    /// Message suitable for showing to the person who uploaded the document
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured { .. } => {
                "Serviço de IA não configurado. Selecione um provedor e informe a chave de API."
                    .to_string()
            }
            Self::ColdStart { provider, .. } => format!(
                "O modelo do {} está sendo carregado. Tente novamente em alguns segundos.",
                provider
            ),
            Self::Http {
                provider,
                status,
                body,
            } => format!("Erro ao gerar resumo com {} (HTTP {}): {}", provider, status, body),
            Self::Connection { provider, message } => {
                format!("Erro ao conectar com {}: {}", provider, message)
            }
            Self::Schema { provider, message } => {
                format!("Resposta inesperada de {}: {}", provider, message)
            }
        }
    }
}

/// Cut a response body down to [`MAX_ERROR_BODY_CHARS`] characters
pub fn truncate_body(body: &str) -> String {
    let body = body.trim();

    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((offset, _)) => format!("{}...", &body[..offset]),
        None => body.to_string(),
    }
}
