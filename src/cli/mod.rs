//! CLI module for the document summarizer
//!
//! Provides subcommands:
//! - `extract`: print the text extracted from a local file
//! - `summarize`: extract and summarize a local file with one provider
//! - `serve`: run the HTTP API

pub mod extract;
pub mod serve;
pub mod summarize;

use clap::{Parser, Subcommand};

/// Document Summarizer - text extraction with OCR fallback and AI summaries
#[derive(Parser)]
#[command(name = "doc-summarizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the text extracted from a document
    Extract(extract::ExtractArgs),

    /// Extract a document and print its summary
    Summarize(summarize::SummarizeArgs),

    /// Run the HTTP API server
    Serve,
}
