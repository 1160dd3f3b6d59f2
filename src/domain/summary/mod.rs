//! Summarization domain models and traits

mod adapter;
mod error;
mod prompt;
mod provider;

pub use adapter::ProviderAdapter;
pub use error::{SummaryError, SummaryResult, truncate_body, MAX_ERROR_BODY_CHARS};
pub use prompt::PromptTemplate;
pub use provider::{ProviderConfig, ProviderKind};
