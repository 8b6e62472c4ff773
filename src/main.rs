// src/main.rs
mod app;
mod extractors;
mod storage;
mod tdnet;
mod utils;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use app::RunConfig;
use tdnet::client::{TDNET_BASE_URL, TDNET_REQUEST_DELAY_MS};
use utils::AppError;

/// Saves one day's TDnet timely-disclosure list as CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Date to collect (YYYY-MM-DD). Defaults to today.
    date: Option<String>,

    /// Output directory for the CSV (overrides CSV_DIRECTORY)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Portal origin to fetch list pages from
    #[arg(long, default_value = TDNET_BASE_URL)]
    base_url: String,

    /// Pause before each page request, in milliseconds
    #[arg(long, default_value_t = TDNET_REQUEST_DELAY_MS)]
    request_delay_ms: u64,

    /// Debug mode - save each fetched page's raw HTML
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Pick up CSV_DIRECTORY etc. from .env, if present
    dotenv::dotenv().ok();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 3. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    let config = RunConfig {
        date: args.date,
        output_dir: utils::config::output_dir_from_env(args.output_dir),
        base_url: args.base_url,
        request_delay: Duration::from_millis(args.request_delay_ms),
        debug: args.debug,
    };

    match app::run(&config).await? {
        Some(path) => tracing::info!("Wrote {}", path.display()),
        None => tracing::info!("No disclosures found; no CSV written"),
    }

    Ok(())
}
