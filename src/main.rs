//! craving-lunch: find somewhere to eat from the command line
//!
//! Runs a single action invocation against the process environment.

use anyhow::Result;
use clap::Parser;
use craving_lunch::{config, ProcessHost, SearchHandler, SearchRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search Yelp for somewhere to eat
#[derive(Parser)]
#[command(name = "craving-lunch")]
#[command(about = "Search Yelp for the top five places matching a keyword near a location", long_about = None)]
#[command(version)]
struct Cli {
    /// What you are craving, e.g. "tacos"
    keyword: String,

    /// Where to look, e.g. "Oakland, CA"
    location: String,

    /// Path to a settings.yml file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = {
        // Settings may raise the log level, so load them before logging starts
        let settings = config::load(cli.config.as_deref());
        let debug = settings.as_ref().map(|s| s.general.debug).unwrap_or(false);
        init_logging(cli.verbose, debug);
        settings?
    };

    info!("Starting craving-lunch v{}", craving_lunch::VERSION);

    let handler = SearchHandler::from_settings(&settings)?;
    let request = SearchRequest::new(cli.keyword, cli.location);

    match handler.handle(&request, &ProcessHost::new()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

/// Log to stderr so stdout only carries the payload
fn init_logging(verbose: u8, debug: bool) {
    let default_level = match verbose {
        0 if debug => "debug",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("craving_lunch={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
