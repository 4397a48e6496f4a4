use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::annotate::pipeline::AnnotatorPipeline;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Annotation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Annotation server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Annotation server returned a non-JSON response: {0}")]
    MalformedResponse(serde_json::Error),
}

/// The seam request handlers depend on. Implemented by [`AnnotationClient`]
/// for the real server and by stubs in tests.
#[async_trait]
pub trait AnnotationBackend: Send + Sync {
    /// Annotate `text` with the given pipeline and return the raw result JSON.
    async fn annotate(
        &self,
        text: &str,
        pipeline: &AnnotatorPipeline,
    ) -> Result<serde_json::Value, AnnotationError>;
}

/// Client for a CoreNLP-style annotation server.
///
/// One client is constructed at process start and shared across all
/// requests; `reqwest::Client` holds the connection pool internally.
pub struct AnnotationClient {
    client: Client,
    base_url: String,
}

impl AnnotationClient {
    /// Create a client for the annotation server at `host:port`.
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        // Accept both bare hostnames and scheme-qualified hosts
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}:{port}")
        } else {
            format!("http://{host}:{port}")
        };

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Base URL this client sends annotation requests to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnnotationBackend for AnnotationClient {
    async fn annotate(
        &self,
        text: &str,
        pipeline: &AnnotatorPipeline,
    ) -> Result<serde_json::Value, AnnotationError> {
        // The server takes the raw text as the POST body and the pipeline
        // as a JSON-encoded `properties` query parameter.
        let properties = pipeline.properties().to_string();

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("properties", properties.as_str())])
            .header("content-type", "text/plain; charset=utf-8")
            .body(text.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("annotation server error {status}: {body}");
            return Err(AnnotationError::Status { status, body });
        }

        // Some servers label the JSON body text/plain, so parse from text
        // rather than trusting the content type.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(AnnotationError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_bare_host() {
        let client = AnnotationClient::new("localhost", 9000);
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_base_url_preserves_scheme() {
        let client = AnnotationClient::new("http://corenlp", 9000);
        assert_eq!(client.base_url(), "http://corenlp:9000");
    }
}
