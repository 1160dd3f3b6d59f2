//! AI provider implementations

mod cohere;
mod factory;
mod http_client;
mod huggingface;
mod openai;
mod summarizer;

pub use cohere::CohereAdapter;
pub use factory::ProviderAdapterFactory;
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
pub use huggingface::HuggingFaceAdapter;
pub use openai::OpenAiAdapter;
pub use summarizer::Summarizer;

#[cfg(test)]
pub(crate) use http_client::mock::MockHttpClient;
