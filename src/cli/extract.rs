//! Extract command - prints extracted text to stdout

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::SourceDocument;
use crate::infrastructure::extraction::DocumentExtractor;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Document to read (.pdf, .docx, .xlsx, .xls)
    pub file: PathBuf,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    let (bytes, filename) = read_document(&args.file).await?;
    let extractor = DocumentExtractor::from_config(&config.extraction);

    let extracted = extractor
        .extract_async(SourceDocument::new(bytes, filename))
        .await;
    info!(status = extracted.status.as_str(), "Extraction finished");

    eprintln!("status: {}", extracted.status.as_str());
    println!("{}", extracted.content);

    Ok(())
}

/// Read a local file, returning its bytes and its file name
pub(crate) async fn read_document(path: &std::path::Path) -> anyhow::Result<(Vec<u8>, String)> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} is not a file", path.display()))?;

    Ok((bytes, filename))
}
