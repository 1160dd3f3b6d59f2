use std::fmt::Debug;
use std::time::Duration;

use super::{ProviderConfig, ProviderKind, SummaryError};

/// Request shaping and response extraction for one AI provider
///
/// Adapters are pure: they never perform I/O. The summarizer owns the
/// transport and applies the adapter's mapping around a single POST.
pub trait ProviderAdapter: Send + Sync + Debug {
    fn kind(&self) -> ProviderKind;

    /// Full URL the request is posted to
    fn endpoint(&self, config: &ProviderConfig) -> String;

    fn build_body(&self, prompt: &str, config: &ProviderConfig) -> serde_json::Value;

    /// Summary text at the provider's success field path, if present
    fn extract_summary(&self, body: &serde_json::Value) -> Option<String>;

    /// Human-readable description of the success field path
    fn summary_path(&self) -> &'static str;

    /// Bounded wait for the whole request
    fn timeout(&self) -> Duration;

    /// Provider-specific handling of a status code before generic classification
    fn classify_status(&self, _status: u16, _body: &str) -> Option<SummaryError> {
        None
    }

    fn headers(&self, config: &ProviderConfig) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", config.credential.trim()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]
    }
}
