//! Format dispatch and sentinel degradation

use std::sync::Arc;

use crate::config::ExtractionConfig;
use crate::domain::{
    DocumentFormat, ExtractedText, ExtractionStatus, OcrEngine, PageRasterizer, SourceDocument,
};

use super::docx::extract_docx;
use super::pdf::PdfExtractor;
use super::rasterizer::PdfiumRasterizer;
use super::spreadsheet::extract_spreadsheet;
use super::tesseract::TesseractOcr;

/// Turns uploaded documents into plain text.
///
/// Extraction never fails: unsupported formats and decoder errors yield
/// [`crate::domain::UNEXTRACTABLE_TEXT`] with a degraded status.
#[derive(Clone)]
pub struct DocumentExtractor {
    pdf: PdfExtractor,
}

impl DocumentExtractor {
    pub fn new(
        rasterizer: Arc<dyn PageRasterizer>,
        ocr: Arc<dyn OcrEngine>,
        config: &ExtractionConfig,
    ) -> Self {
        Self {
            pdf: PdfExtractor::new(rasterizer, ocr, config.ocr_dpi, config.max_ocr_pages),
        }
    }

    /// Extractor backed by pdfium and libtesseract
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let rasterizer = match &config.pdfium_library_path {
            Some(dir) => PdfiumRasterizer::with_library_dir(dir),
            None => PdfiumRasterizer::new(),
        };
        let ocr = TesseractOcr::new(config.ocr_languages.clone(), config.ocr_dpi);
        let ocr = match &config.tessdata_path {
            Some(path) => ocr.with_tessdata_path(path.clone()),
            None => ocr,
        };

        Self::new(Arc::new(rasterizer), Arc::new(ocr), config)
    }

    /// Extract text from raw bytes and a declared filename
    pub fn extract(&self, bytes: &[u8], filename: &str) -> ExtractedText {
        self.extract_document(&SourceDocument::new(bytes, filename))
    }

    /// Blocking extraction; OCR may take seconds per page
    #[tracing::instrument(
        skip(self, document),
        fields(filename = %document.filename(), format = %document.format(), bytes = document.len())
    )]
    pub fn extract_document(&self, document: &SourceDocument) -> ExtractedText {
        let bytes = document.bytes();

        let result = match document.format() {
            DocumentFormat::Pdf => self.pdf.extract(bytes),
            DocumentFormat::Docx => {
                extract_docx(bytes).map(|text| ExtractedText::new(text, ExtractionStatus::Docx))
            }
            DocumentFormat::Spreadsheet => extract_spreadsheet(bytes)
                .map(|text| ExtractedText::new(text, ExtractionStatus::Spreadsheet)),
            DocumentFormat::Unsupported => {
                tracing::warn!("Unsupported document format");
                return ExtractedText::unsupported();
            }
        };

        match result {
            Ok(text) => {
                tracing::info!(status = ?text.status, chars = text.content.len(), "Text extracted");
                text
            }
            Err(e) => {
                tracing::warn!(error = %e, "Extraction failed, returning placeholder text");
                ExtractedText::failed()
            }
        }
    }

    /// Run extraction on the blocking thread pool
    pub async fn extract_async(&self, document: SourceDocument) -> ExtractedText {
        let extractor = self.clone();

        match tokio::task::spawn_blocking(move || extractor.extract_document(&document)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Extraction task aborted");
                ExtractedText::failed()
            }
        }
    }
}
