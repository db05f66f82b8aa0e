// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Floatbar CLI - drive the share bar from the command line.
//!
//! Stands in for the host: renders the bar for a post, refreshes cached
//! counts, submits a new service order and edits settings.
//!
//! # Examples
//!
//! ```bash
//! # Render the bar for a post
//! floatbar render --post-id 42 --url https://blog.example/hello/ --title "Hello"
//!
//! # Embed with an explicit selection, forcing a refresh
//! floatbar render --post-id 42 --url https://blog.example/hello/ --title "Hello" \
//!     --attr twitter=true --attr update=true
//!
//! # Enable twitter then facebook, disable the rest
//! floatbar order twitter facebook
//!
//! # JSON output
//! floatbar --format json --pretty config show
//! ```

mod commands;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use floatbar_store::{ConfigStore, FilePostStore, FloatingBar, StoreError, live_context};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, order, refresh, render, services, suppress};

// ============================================================================
// CLI Definition
// ============================================================================

/// Floatbar CLI - floating social share bar.
#[derive(Parser)]
#[command(name = "floatbar")]
#[command(about = "Floating social share bar")]
#[command(long_about = r#"
Floatbar renders a share bar with cached share counts for a post.

Supported services:
  • Facebook (facebook)
  • Twitter (twitter)
  • Google+ (google)
  • LinkedIn (linkedin)
  • Pinterest (pinterest)

Examples:
  floatbar render --post-id 1 --url URL --title TITLE
  floatbar refresh --post-id 1 --url URL --force
  floatbar order twitter facebook
  floatbar config set --label "Share this"
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Settings file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding per-post records.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// The settings store selected by `--config`.
    pub fn config_store(&self) -> ConfigStore {
        match &self.config {
            Some(path) => ConfigStore::new(path),
            None => ConfigStore::default_location(),
        }
    }

    /// The per-post store selected by `--data-dir`.
    pub fn post_store(&self) -> FilePostStore {
        match &self.data_dir {
            Some(dir) => FilePostStore::new(dir),
            None => FilePostStore::default_location(),
        }
    }

    /// The bar over the selected stores and a live HTTP client.
    pub fn floating_bar(&self) -> FloatingBar {
        FloatingBar::new(
            Arc::new(self.config_store()),
            Arc::new(self.post_store()),
            Arc::new(live_context()),
        )
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render the bar for a post.
    #[command(visible_alias = "r")]
    Render(render::RenderArgs),

    /// Refresh a post's cached share counts.
    Refresh(refresh::RefreshArgs),

    /// Submit a new service order.
    #[command(visible_alias = "o")]
    Order(order::OrderArgs),

    /// Hide or show the bar on one post.
    Suppress(suppress::SuppressArgs),

    /// List supported services.
    #[command(visible_alias = "s")]
    Services,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Rejected input, such as an unknown or repeated service.
    InvalidInput = 2,
}

impl ExitCode {
    fn for_error(e: &anyhow::Error) -> Self {
        match e.downcast_ref::<StoreError>() {
            Some(err) if err.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("floatbar=debug,info")
    } else {
        EnvFilter::new("floatbar=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Render(args) => render::run(args, &cli).await,
        Commands::Refresh(args) => refresh::run(args, &cli).await,
        Commands::Order(args) => order::run(args, &cli).await,
        Commands::Suppress(args) => suppress::run(args, &cli).await,
        Commands::Services => services::run(&cli).await,
        Commands::Config(args) => config::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}
