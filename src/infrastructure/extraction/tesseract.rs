//! Local OCR through libtesseract
//!
//! Recognition needs the `tesseract` cargo feature, which links libtesseract
//! and leptonica through `leptess`. Without it every page fails with an OCR
//! error and scanned PDFs degrade to the placeholder text.

use crate::domain::{DomainError, OcrEngine};

/// Tesseract engine configured with a language set and source resolution
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "tesseract"), allow(dead_code))]
pub struct TesseractOcr {
    languages: String,
    dpi: u32,
    tessdata_path: Option<String>,
}

impl TesseractOcr {
    pub fn new(languages: impl Into<String>, dpi: u32) -> Self {
        Self {
            languages: languages.into(),
            dpi,
            tessdata_path: None,
        }
    }

    /// Load `.traineddata` files from `path` instead of tesseract's default
    pub fn with_tessdata_path(mut self, path: impl Into<String>) -> Self {
        self.tessdata_path = Some(path.into());
        self
    }

    /// Resolution handed to tesseract, clamped to what its API accepts
    #[cfg_attr(not(feature = "tesseract"), allow(dead_code))]
    fn source_resolution(&self) -> i32 {
        i32::try_from(self.dpi).unwrap_or(i32::MAX)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("por+eng", 300)
    }
}

#[cfg(feature = "tesseract")]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, png: &[u8]) -> Result<String, DomainError> {
        // LepTess is neither Send nor Sync, so each page gets its own instance.
        let mut engine = leptess::LepTess::new(self.tessdata_path.as_deref(), &self.languages)
            .map_err(|e| {
                DomainError::ocr(format!(
                    "failed to load tesseract languages '{}': {:?}",
                    self.languages, e
                ))
            })?;

        engine
            .set_image_from_mem(png)
            .map_err(|e| DomainError::ocr(format!("failed to decode page image: {:?}", e)))?;
        engine.set_source_resolution(self.source_resolution());

        engine
            .get_utf8_text()
            .map_err(|e| DomainError::ocr(format!("tesseract returned invalid UTF-8: {}", e)))
    }

    fn engine_name(&self) -> &'static str {
        "tesseract"
    }
}

#[cfg(not(feature = "tesseract"))]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, _png: &[u8]) -> Result<String, DomainError> {
        Err(DomainError::ocr(
            "built without the `tesseract` feature; OCR is unavailable",
        ))
    }

    fn engine_name(&self) -> &'static str {
        "tesseract (disabled)"
    }
}
