//! hf_assets CLI application
//!
//! Downloads the assets of a Hugging Face Hub repository into `./configs`.

use std::process;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use hf_assets::cli::{handle_fetch, Cli};
use hf_assets::config::AppConfig;
use hf_assets::errors::Result;
use hf_assets::HubSnapshotFetcher;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        debug!("Exiting after {} error", e.category());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.clone()).await?;

    init_logging(&cli, &config);
    debug!("hf_assets v{} starting", env!("CARGO_PKG_VERSION"));

    let mut fetcher = HubSnapshotFetcher::new(&config.hub);
    if cli.global.quiet {
        fetcher = fetcher.quiet();
    }

    handle_fetch(&cli.fetch, &fetcher).await?;
    Ok(())
}

/// Initialize logging based on CLI verbosity and config settings
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli.log_level(config);

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("hf_assets={}", log_level).parse() {
        filter = filter.add_directive(directive);
    }

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
