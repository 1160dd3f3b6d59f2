//! Multipart document upload extractor

use axum::extract::{FromRequest, Multipart, Request};

use super::error::{ApiError, ApiErrorType};
use crate::domain::{ProviderConfig, ProviderKind};

/// Form fields of an upload request
///
/// `file` is required; `provider`, `api_key` and `model` only matter for
/// summarization. Unknown fields are ignored.
#[derive(Default)]
pub struct DocumentUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl DocumentUpload {
    /// Provider selection from the form, if both provider and key were sent
    pub fn provider_config(&self) -> Result<Option<ProviderConfig>, ApiError> {
        let Some(provider) = non_blank(&self.provider) else {
            return Ok(None);
        };

        let kind: ProviderKind = provider
            .parse()
            .map_err(|e: crate::domain::DomainError| ApiError::from(e).with_param("provider"))?;

        let Some(api_key) = non_blank(&self.api_key) else {
            return Ok(None);
        };

        let mut config = ProviderConfig::new(kind, api_key);
        if let Some(model) = non_blank(&self.model) {
            config = config.with_model(model);
        }

        Ok(Some(config))
    }
}

impl std::fmt::Debug for DocumentUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn multipart_error(status: axum::http::StatusCode, message: String) -> ApiError {
    ApiError::new(status, ApiErrorType::InvalidRequestError, message).with_code("invalid_multipart")
}

impl<S> FromRequest<S> for DocumentUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| multipart_error(rejection.status(), rejection.body_text()))?;

        let mut upload = DocumentUpload::default();
        let mut has_file = false;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "file" => {
                    has_file = true;
                    upload.filename = field.file_name().unwrap_or_default().to_string();
                    upload.bytes = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e.status(), e.body_text()))?
                        .to_vec();
                }
                "provider" | "api_key" | "model" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e.status(), e.body_text()))?;
                    match name.as_str() {
                        "provider" => upload.provider = Some(value),
                        "api_key" => upload.api_key = Some(value),
                        _ => upload.model = Some(value),
                    }
                }
                _ => {}
            }
        }

        if !has_file {
            return Err(ApiError::bad_request("Nenhum arquivo enviado")
                .with_param("file")
                .with_code("missing_file"));
        }

        if upload.filename.trim().is_empty() {
            return Err(ApiError::bad_request("Nenhum arquivo selecionado")
                .with_param("file")
                .with_code("missing_filename"));
        }

        Ok(upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(provider: Option<&str>, api_key: Option<&str>, model: Option<&str>) -> DocumentUpload {
        DocumentUpload {
            filename: "a.pdf".to_string(),
            bytes: vec![1, 2, 3],
            provider: provider.map(str::to_string),
            api_key: api_key.map(str::to_string),
            model: model.map(str::to_string),
        }
    }

    #[test]
    fn test_provider_config_requires_provider_and_key() {
        assert!(upload(None, Some("k"), None).provider_config().unwrap().is_none());
        assert!(upload(Some("openai"), None, None).provider_config().unwrap().is_none());
        assert!(upload(Some("openai"), Some("  "), None).provider_config().unwrap().is_none());
    }

    #[test]
    fn test_provider_config_with_model() {
        let config = upload(Some("huggingface"), Some("hf_x"), Some("google/pegasus-xsum"))
            .provider_config()
            .unwrap()
            .unwrap();

        assert_eq!(config.provider, ProviderKind::HuggingFace);
        assert_eq!(config.selected_model(), Some("google/pegasus-xsum"));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = upload(Some("bard"), Some("k"), None).provider_config().unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.param.as_deref(), Some("provider"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", upload(Some("openai"), Some("sk-secret"), None));

        assert!(!debug.contains("sk-secret"));
    }
}
