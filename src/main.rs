use clap::Parser;
use doc_summarizer::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => cli::extract::run(args).await,
        Command::Summarize(args) => cli::summarize::run(args).await,
        Command::Serve => cli::serve::run().await,
    }
}
