//! Request and response types for the HTTP surface

pub mod documents;
pub mod error;
pub mod upload;

pub use documents::{ExtractResponse, ProviderInfo, ProvidersResponse, SummarizeResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use upload::DocumentUpload;
