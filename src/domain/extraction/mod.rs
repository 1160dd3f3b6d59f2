//! Text extraction domain types and traits
//!
//! This module provides:
//! - `SourceDocument` and `DocumentFormat` for suffix-based format detection
//! - `ExtractedText` with the status describing how the text was obtained
//! - `PageRasterizer` and `OcrEngine` seams for the scanned-PDF fallback

pub mod document;
pub mod ocr;
pub mod text;

pub use document::{DocumentFormat, SourceDocument};
pub use ocr::{OcrEngine, PageRasterizer, PageSink};
pub use text::{ExtractedText, ExtractionStatus, UNEXTRACTABLE_TEXT};

#[cfg(test)]
pub use ocr::{mock::MockPageRasterizer, MockOcrEngine};
