//! Command-line interface for anno-gateway.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **annotate**: Send text to the annotation server and print the result
//! - **serve**: Start the gateway web server
//!
//! ## Usage
//!
//! ```text
//! # Annotate a sentence directly
//! anno-gateway annotate "Hello world. How are you?"
//!
//! # Pipe text from stdin
//! cat article.txt | anno-gateway annotate -
//!
//! # Compact JSON output for scripting
//! anno-gateway annotate "One sentence." --format json
//!
//! # Start the gateway against a remote annotation server
//! anno-gateway serve --annotation-host corenlp.internal --port 8080
//!
//! # Also expose the JSON API route
//! anno-gateway serve --api
//! ```

use clap::{Parser, Subcommand};

pub mod annotate;

#[derive(Parser)]
#[command(name = "anno-gateway")]
#[command(version)]
#[command(about = "Relay text to a CoreNLP-style annotation server")]
#[command(
    long_about = "anno-gateway forwards text to an external annotation server and relays the JSON result.\n\nThe annotation server performs the actual NLP work (tokenize, ssplit, pos); the gateway validates input, applies a fixed annotator pipeline, and returns the raw annotation JSON either over HTTP (serve) or on the command line (annotate)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate text and print the raw annotation JSON
    Annotate(annotate::AnnotateArgs),

    /// Start the gateway web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Hostname of the annotation server
    #[arg(long, default_value = "localhost")]
    pub annotation_host: String,

    /// Port of the annotation server
    #[arg(long, default_value = "9000")]
    pub annotation_port: u16,

    /// Also expose the JSON API route (POST /api/process)
    #[arg(long)]
    pub api: bool,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
