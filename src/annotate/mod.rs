//! Client for the external annotation server.
//!
//! The annotation server is a CoreNLP-style HTTP service: text is POSTed as
//! the request body with a `properties` query parameter describing the
//! annotator pipeline, and the result comes back as JSON. The gateway never
//! interprets that JSON; it is relayed verbatim.
//!
//! ## Example
//!
//! ```rust,no_run
//! use anno_gateway::annotate::client::{AnnotationBackend, AnnotationClient};
//! use anno_gateway::annotate::pipeline::AnnotatorPipeline;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = AnnotationClient::new("localhost", 9000);
//! let json = client.annotate("One sentence.", &AnnotatorPipeline::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod pipeline;
