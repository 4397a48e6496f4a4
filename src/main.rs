use clap::Parser;
use tracing_subscriber::EnvFilter;

mod annotate;
mod cli;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("anno_gateway=debug,info")
    } else {
        EnvFilter::new("anno_gateway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        cli::Commands::Annotate(args) => {
            cli::annotate::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
