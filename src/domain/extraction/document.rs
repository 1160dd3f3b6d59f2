//! Uploaded document and its detected format

use std::fmt;

use serde::{Deserialize, Serialize};

/// Document format, inferred from the filename suffix only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Spreadsheet,
    Unsupported,
}

impl DocumentFormat {
    /// Detect the format from a filename (case-insensitive suffix match)
    pub fn from_filename(filename: &str) -> Self {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return Self::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "xlsx" | "xls" => Self::Spreadsheet,
            _ => Self::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Spreadsheet => "spreadsheet",
            Self::Unsupported => "unsupported",
        }
    }

    /// Extensions accepted by the extractor
    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "docx", "xlsx", "xls"]
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw bytes of an uploaded document together with its declared filename
#[derive(Clone)]
pub struct SourceDocument {
    bytes: Vec<u8>,
    filename: String,
    format: DocumentFormat,
}

impl SourceDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename);

        Self {
            bytes: bytes.into(),
            filename,
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDocument")
            .field("filename", &self.filename)
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}
