use std::path::PathBuf;

use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::domain::{DomainError, PageRasterizer, PageSink};

const POINTS_PER_INCH: f32 = 72.0;

/// Renders PDF pages through the pdfium shared library
#[derive(Debug, Clone, Default)]
pub struct PdfiumRasterizer {
    library_dir: Option<PathBuf>,
}

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load pdfium from `dir` instead of the system search path
    pub fn with_library_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: Some(dir.into()),
        }
    }

    fn bind(&self) -> Result<Pdfium, DomainError> {
        let bindings = match &self.library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| DomainError::ocr(format!("pdfium bind failed: {e}")))?;

        Ok(Pdfium::new(bindings))
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn render_pages(
        &self,
        pdf: &[u8],
        dpi: u32,
        max_pages: usize,
        on_page: &mut PageSink<'_>,
    ) -> Result<usize, DomainError> {
        let pdfium = self.bind()?;

        let doc = pdfium
            .load_pdf_from_byte_slice(pdf, None)
            .map_err(|e| DomainError::ocr(format!("pdfium open failed: {e}")))?;

        let page_count = doc.pages().len();
        let pages_to_render = page_count.min(page_limit(max_pages));

        if pages_to_render < page_count {
            tracing::warn!(
                page_count,
                max_pages,
                "PDF exceeds OCR page limit, remaining pages skipped"
            );
        }

        let scale = dpi as f32 / POINTS_PER_INCH;

        for index in 0..pages_to_render {
            let page = doc.pages().get(index).map_err(|e| {
                DomainError::ocr(format!("page {index} access failed: {e}"))
            })?;

            let width = (page.width().value * scale) as i32;
            let height = (page.height().value * scale) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(width)
                        .set_target_height(height),
                )
                .map_err(|e| DomainError::ocr(format!("render page {index} failed: {e}")))?;

            let mut png_bytes: Vec<u8> = Vec::new();
            bitmap
                .as_image()
                .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
                .map_err(|e| DomainError::ocr(format!("PNG encode page {index} failed: {e}")))?;

            drop(bitmap);
            on_page(usize::from(index), png_bytes)?;
        }

        Ok(usize::from(pages_to_render))
    }
}

/// Page limit expressed as a pdfium page index, saturating at its maximum
fn page_limit(max_pages: usize) -> PdfPageIndex {
    PdfPageIndex::try_from(max_pages).unwrap_or(PdfPageIndex::MAX)
}
