//! Infrastructure services

mod pipeline;

pub use pipeline::{DocumentPipeline, PipelineOutput};
