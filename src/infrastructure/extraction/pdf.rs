//! PDF extraction: text layer first, OCR when the text layer is empty

use std::sync::Arc;

use crate::domain::{DomainError, ExtractedText, ExtractionStatus, OcrEngine, PageRasterizer};

/// Two-stage PDF extractor
#[derive(Clone)]
pub struct PdfExtractor {
    rasterizer: Arc<dyn PageRasterizer>,
    ocr: Arc<dyn OcrEngine>,
    dpi: u32,
    max_pages: usize,
}

impl PdfExtractor {
    pub fn new(
        rasterizer: Arc<dyn PageRasterizer>,
        ocr: Arc<dyn OcrEngine>,
        dpi: u32,
        max_pages: usize,
    ) -> Self {
        Self {
            rasterizer,
            ocr,
            dpi,
            max_pages,
        }
    }

    /// Extract text, falling back to OCR when the text layer yields nothing
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, DomainError> {
        match extract_text_layer(bytes) {
            Ok(text) if has_text(&text) => {
                return Ok(ExtractedText::new(text, ExtractionStatus::TextLayer));
            }
            Ok(_) => tracing::info!("PDF has no text layer, falling back to OCR"),
            Err(e) => tracing::warn!(error = %e, "PDF text layer extraction failed, falling back to OCR"),
        }

        let text = self.extract_with_ocr(bytes)?;
        Ok(ExtractedText::new(text, ExtractionStatus::Ocr))
    }

    fn extract_with_ocr(&self, bytes: &[u8]) -> Result<String, DomainError> {
        tracing::info!(
            dpi = self.dpi,
            engine = self.ocr.engine_name(),
            "Running OCR on rendered pages"
        );

        let mut fragments = Vec::new();
        let mut recognize = |index: usize, image: Vec<u8>| -> Result<(), DomainError> {
            let text = self.ocr.recognize(&image).map_err(|e| {
                DomainError::ocr(format!("page {} recognition failed: {}", index + 1, e))
            })?;
            fragments.push(text.trim_end().to_string());
            Ok(())
        };

        let page_count =
            self.rasterizer
                .render_pages(bytes, self.dpi, self.max_pages, &mut recognize)?;

        tracing::debug!(page_count, "OCR finished");

        Ok(fragments.join("\n"))
    }
}

/// Success predicate for the text-layer stage
fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Text layer of every page, in page order, one fragment per page
pub fn extract_text_layer(bytes: &[u8]) -> Result<String, DomainError> {
    let document = lopdf::Document::load_mem(bytes)
        .map_err(|e| DomainError::extraction("pdf", format!("failed to parse PDF: {}", e)))?;

    if document.is_encrypted() {
        return Err(DomainError::extraction("pdf", "document is encrypted"));
    }

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let mut fragments = Vec::with_capacity(page_numbers.len());

    for page_number in page_numbers {
        let text = document.extract_text(&[page_number]).map_err(|e| {
            DomainError::extraction(
                "pdf",
                format!("failed to read text of page {}: {}", page_number, e),
            )
        })?;
        fragments.push(text.trim_end_matches(['\n', '\r']).to_string());
    }

    tracing::debug!(page_count = fragments.len(), "PDF text layer extracted");

    Ok(fragments.join("\n"))
}
