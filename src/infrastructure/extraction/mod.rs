//! Document text extraction implementations

mod docx;
mod extractor;
mod pdf;
mod rasterizer;
mod spreadsheet;
mod tesseract;

pub use docx::extract_docx;
pub use extractor::DocumentExtractor;
pub use pdf::{extract_text_layer, PdfExtractor};
pub use rasterizer::PdfiumRasterizer;
pub use spreadsheet::extract_spreadsheet;
pub use tesseract::TesseractOcr;

#[cfg(test)]
pub(crate) use docx::fixtures::docx_with_paragraphs;
