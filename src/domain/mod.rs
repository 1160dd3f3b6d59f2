//! Domain layer - Core types and traits for extraction and summarization

pub mod error;
pub mod extraction;
pub mod summary;

pub use error::DomainError;
pub use extraction::{
    DocumentFormat, ExtractedText, ExtractionStatus, OcrEngine, PageRasterizer, PageSink,
    SourceDocument, UNEXTRACTABLE_TEXT,
};
pub use summary::{
    PromptTemplate, ProviderAdapter, ProviderConfig, ProviderKind, SummaryError, SummaryResult,
    MAX_ERROR_BODY_CHARS,
};

#[cfg(test)]
pub use extraction::{MockOcrEngine, MockPageRasterizer};
