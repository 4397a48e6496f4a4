use serde::{Deserialize, Serialize};

/// A single annotation step the server can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotator {
    Tokenize,
    Ssplit,
    Pos,
}

impl std::fmt::Display for Annotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize => write!(f, "tokenize"),
            Self::Ssplit => write!(f, "ssplit"),
            Self::Pos => write!(f, "pos"),
        }
    }
}

/// Output format requested from the annotation server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationFormat {
    Json,
}

impl std::fmt::Display for AnnotationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
        }
    }
}

/// Ordered annotator pipeline sent with every request.
///
/// The server runs the annotators in the order given; `pos` requires the
/// output of `tokenize` and `ssplit`, so the default ordering matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorPipeline {
    pub annotators: Vec<Annotator>,
    pub output_format: AnnotationFormat,
}

impl Default for AnnotatorPipeline {
    fn default() -> Self {
        Self {
            annotators: vec![Annotator::Tokenize, Annotator::Ssplit, Annotator::Pos],
            output_format: AnnotationFormat::Json,
        }
    }
}

impl AnnotatorPipeline {
    /// Comma-joined annotator list as the server expects it,
    /// e.g. `tokenize,ssplit,pos`
    #[must_use]
    pub fn annotator_spec(&self) -> String {
        self.annotators
            .iter()
            .map(Annotator::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The `properties` parameter value for the annotation request
    #[must_use]
    pub fn properties(&self) -> serde_json::Value {
        serde_json::json!({
            "annotators": self.annotator_spec(),
            "outputFormat": self.output_format.to_string(),
        })
    }
}

impl std::fmt::Display for AnnotatorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.annotator_spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_spec() {
        let pipeline = AnnotatorPipeline::default();
        assert_eq!(pipeline.annotator_spec(), "tokenize,ssplit,pos");
        assert_eq!(pipeline.output_format, AnnotationFormat::Json);
    }

    #[test]
    fn test_properties_shape() {
        let props = AnnotatorPipeline::default().properties();
        assert_eq!(props["annotators"], "tokenize,ssplit,pos");
        assert_eq!(props["outputFormat"], "json");
    }

    #[test]
    fn test_annotator_display() {
        assert_eq!(Annotator::Tokenize.to_string(), "tokenize");
        assert_eq!(Annotator::Ssplit.to_string(), "ssplit");
        assert_eq!(Annotator::Pos.to_string(), "pos");
    }

    #[test]
    fn test_single_annotator_spec() {
        let pipeline = AnnotatorPipeline {
            annotators: vec![Annotator::Tokenize],
            output_format: AnnotationFormat::Json,
        };
        assert_eq!(pipeline.annotator_spec(), "tokenize");
    }
}
