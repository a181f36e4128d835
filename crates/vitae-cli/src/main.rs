//! Vitae CLI - a real person from history for every day.

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vitae_cli::cli::ResolveArgs;
use vitae_cli::commands;
use vitae_cli::{Cli, Command, Config, Formatter};
use vitae_service::PersonResolutionService;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> vitae_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Classify(args)) => {
            commands::execute_classify(args, &config.service.classifier, &formatter)?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &config.service.extractor, &formatter)?;
        }
        command => {
            let (date, args) = match command {
                Some(Command::Date(args)) => (Some(args.date), args.resolve),
                Some(Command::Today(args)) => (None, args),
                _ => (None, ResolveArgs::default()),
            };
            let service = Arc::new(PersonResolutionService::wikipedia(config.service)?);
            commands::execute_resolve(&service, date, args, &formatter).await?;
        }
    }

    Ok(())
}
