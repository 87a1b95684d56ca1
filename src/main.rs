//! Logofinder main entry point
//!
//! Command-line interface for discovering organization logos, one site at
//! a time or over a whole CSV of organizations.

use clap::{Parser, Subcommand};
use logofinder::logo::build_http_client;
use logofinder::{batch, logo};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Logofinder: best-effort logo discovery for organization websites
///
/// Scans each website for logo-looking images and favicons, measures the
/// candidates, and reports the largest. Batch output goes to stdout as
/// CSV; diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "logofinder")]
#[command(version)]
#[command(about = "Find organization logos by scraping their websites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the logo for a single website URL
    ResolveOne {
        /// Website URL to scan
        url: String,
    },

    /// Resolve logos for every row of a CSV, streaming output to stdout
    ResolveAll {
        /// Input CSV with a header row and a "Web" column
        input: PathBuf,
    },

    /// Like resolve-all, but first replay rows from a previous partial output
    ResolveAllContinue {
        /// Input CSV with a header row and a "Web" column
        input: PathBuf,

        /// Output of an earlier interrupted run over the same input
        previous: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let client = build_http_client()?;

    match cli.command {
        Command::ResolveOne { url } => handle_resolve_one(&client, &url).await,
        Command::ResolveAll { input } => handle_resolve_all(&client, &input, None).await?,
        Command::ResolveAllContinue { input, previous } => {
            handle_resolve_all(&client, &input, Some(&previous)).await?
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
///
/// Diagnostics always go to stderr: stdout is reserved for the primary
/// output stream.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("logofinder=info,warn"),
            1 => EnvFilter::new("logofinder=debug,info"),
            2 => EnvFilter::new("logofinder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handles resolve-one: print the logo URL or a not-found message
///
/// Exit code is 0 either way; an unreachable site is an ordinary outcome.
async fn handle_resolve_one(client: &reqwest::Client, url: &str) {
    let logo_url = logo::resolve_site(client, url).await;
    if logo_url.is_empty() {
        println!("No logo found.");
    } else {
        println!("{}", logo_url);
    }
}

/// Handles resolve-all and resolve-all-continue
async fn handle_resolve_all(
    client: &reqwest::Client,
    input: &Path,
    previous: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    batch::run_batch(
        client,
        input,
        previous.map(PathBuf::as_path),
        stdout.lock(),
    )
    .await?;
    Ok(())
}
