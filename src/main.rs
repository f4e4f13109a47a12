use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use site_publisher::config;
use site_publisher::pipeline::{self, RunOptions};
use site_publisher::telemetry;

/// Publishes articles whose date has come and refreshes the sitemap.
///
/// Run without arguments from the site root for the daily build.
#[derive(Parser)]
#[command(name = "site-publisher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site root directory (overrides SITE_ROOT)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Evaluate publish dates at this RFC 3339 time instead of now
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Leave the sitemap untouched
    #[arg(long)]
    skip_sitemap: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match config::load_from_env(cli.root.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init(&config);
    config.print_summary();

    let mut options = RunOptions::now();
    if let Some(now) = cli.now {
        options.now = now;
    }
    options.skip_sitemap = cli.skip_sitemap;

    match pipeline::run(&config, options).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
