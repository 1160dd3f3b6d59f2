//! Infrastructure layer - Document decoders and external service implementations

pub mod extraction;
pub mod llm;
pub mod logging;
pub mod services;
