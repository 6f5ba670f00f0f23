//! Studio CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use studio_cli::cli::Cli;
use studio_cli::{commands, config};

fn main() {
    // Load .env.local if it exists (STUDIO_ITEMS_FILE etc.)
    config::load_dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
