//! Summarize command - extracts a local file and prints its summary

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::{ProviderConfig, ProviderKind};
use crate::infrastructure::logging;
use crate::infrastructure::services::DocumentPipeline;

use super::extract::read_document;

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Document to summarize (.pdf, .docx, .xlsx, .xls)
    pub file: PathBuf,

    /// AI provider: openai, huggingface or cohere
    #[arg(long)]
    pub provider: ProviderKind,

    /// Provider API key
    #[arg(long, env = "SUMMARIZER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier (HuggingFace only)
    #[arg(long)]
    pub model: Option<String>,
}

impl SummarizeArgs {
    fn provider_config(&self) -> Option<ProviderConfig> {
        let api_key = self.api_key.as_deref()?;
        let config = ProviderConfig::new(self.provider, api_key);

        Some(match &self.model {
            Some(model) => config.with_model(model.clone()),
            None => config,
        })
    }
}

pub async fn run(args: SummarizeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    let (bytes, filename) = read_document(&args.file).await?;
    let pipeline = DocumentPipeline::from_config(&config);
    let provider = args.provider_config();

    let output = pipeline.process(bytes, &filename, provider.as_ref()).await;

    match output.summary {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("{} [{}]", e.user_message(), e.code())),
    }
}
