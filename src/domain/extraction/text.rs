//! Extraction result types

use serde::{Deserialize, Serialize};

/// Placeholder returned when a document cannot be turned into text
pub const UNEXTRACTABLE_TEXT: &str = "Não foi possível extrair texto deste documento.";

/// How the text of an [`ExtractedText`] was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// PDF text layer
    TextLayer,
    /// PDF pages rendered and recognized
    Ocr,
    /// DOCX paragraphs
    Docx,
    /// Spreadsheet rows
    Spreadsheet,
    /// Filename suffix not recognized
    Unsupported,
    /// Decoder failed on a recognized format
    Failed,
}

impl ExtractionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextLayer => "text_layer",
            Self::Ocr => "ocr",
            Self::Docx => "docx",
            Self::Spreadsheet => "spreadsheet",
            Self::Unsupported => "unsupported",
            Self::Failed => "failed",
        }
    }

    /// Whether the content is the sentinel rather than document text
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Unsupported | Self::Failed)
    }
}

/// Plain text extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
    pub content: String,
    pub status: ExtractionStatus,
}

impl ExtractedText {
    pub fn new(content: impl Into<String>, status: ExtractionStatus) -> Self {
        Self {
            content: content.into(),
            status,
        }
    }

    pub fn unsupported() -> Self {
        Self::new(UNEXTRACTABLE_TEXT, ExtractionStatus::Unsupported)
    }

    pub fn failed() -> Self {
        Self::new(UNEXTRACTABLE_TEXT, ExtractionStatus::Failed)
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
