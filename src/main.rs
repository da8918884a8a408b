//! Main entry point for the tabular translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabular_translate::cli::commands::{self, Commands};
use tabular_translate::{TranslationClient, TranslatorConfig};

/// Tabular Translate - translate CSV headers and cells through a translation service
#[derive(Parser, Debug)]
#[command(name = "tabular-translate", version, about, long_about = None)]
struct Args {
    /// Translation server (optional, defaults to TRANSLATION_SERVER env var)
    #[arg(long)]
    server: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("tabular_translate=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tabular_translate=info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // CLI args take precedence over the environment
    let config = TranslatorConfig::from_env_with(args.server, args.timeout_ms)?;

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let client = TranslationClient::new(config)?;
    commands::dispatch(&client, command).await
}
