use clap::Args;

use crate::annotate::client::{AnnotationBackend, AnnotationClient};
use crate::annotate::pipeline::AnnotatorPipeline;
use crate::cli::OutputFormat;
use crate::utils::validation;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Text to annotate. Use '-' to read from stdin.
    #[arg(required = true)]
    pub text: String,

    /// Hostname of the annotation server
    #[arg(long, default_value = "localhost")]
    pub annotation_host: String,

    /// Port of the annotation server
    #[arg(long, default_value = "9000")]
    pub annotation_port: u16,
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if stdin cannot be read, the input fails validation,
/// or the annotation server call fails.
pub fn run(args: &AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(args)?;

    if !validation::looks_like_sentence(&text) {
        anyhow::bail!("input must be non-empty and contain at least one sentence (a '.')");
    }
    if let Some(msg) = validation::check_text_length(&text) {
        anyhow::bail!(msg);
    }

    let pipeline = AnnotatorPipeline::default();

    if verbose {
        eprintln!(
            "Annotating {} bytes via http://{}:{} (annotators: {pipeline})",
            text.len(),
            args.annotation_host,
            args.annotation_port,
        );
    }

    let client = AnnotationClient::new(&args.annotation_host, args.annotation_port);

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async { client.annotate(&text, &pipeline).await })?;

    match format {
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
    }

    Ok(())
}

fn read_input(args: &AnnotateArgs) -> anyhow::Result<String> {
    use std::io::Read;

    if args.text == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(args.text.clone())
    }
}
