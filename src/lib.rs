//! # anno-gateway
//!
//! A small HTTP gateway that relays user-submitted text to a CoreNLP-style
//! annotation server and returns the raw annotation JSON.
//!
//! The annotation server does the real work (tokenization, sentence
//! splitting, part-of-speech tagging); this crate only validates input,
//! forwards it with a fixed annotator pipeline, and wraps the response.
//!
//! ## Example
//!
//! ```rust,no_run
//! use anno_gateway::annotate::client::AnnotationClient;
//! use anno_gateway::annotate::pipeline::AnnotatorPipeline;
//! use anno_gateway::annotate::client::AnnotationBackend;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = AnnotationClient::new("localhost", 9000);
//! let result = client
//!     .annotate("Hello world. How are you?", &AnnotatorPipeline::default())
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`annotate`]: Client for the external annotation server
//! - [`utils`]: Input validation helpers
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: The gateway web server

pub mod annotate;
pub mod cli;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use annotate::client::{AnnotationBackend, AnnotationClient, AnnotationError};
pub use annotate::pipeline::AnnotatorPipeline;
pub use web::server::GatewayConfig;
