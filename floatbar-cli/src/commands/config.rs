//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use floatbar_core::{GlobalConfig, SettingsUpdate};
use floatbar_store::{ConfigRepository, ConfigStore};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show the settings file path.
    Path,

    /// Write default settings unless settings already exist.
    Init,

    /// Save settings. Omitted options are left unchanged.
    Set(SetArgs),

    /// Delete stored settings.
    Reset,
}

/// Arguments for `config set`.
#[derive(Args)]
pub struct SetArgs {
    /// Title shown in front of the buttons. Empty clears it.
    #[arg(long)]
    pub label: Option<String>,

    /// Twitter handle for `via=`, with or without `@`.
    #[arg(long)]
    pub twitter: Option<String>,

    /// Cache lifetime in seconds. Non-positive values restore the default.
    #[arg(long, allow_negative_numbers = true)]
    pub ttl: Option<i64>,

    /// Content types that show the bar (repeatable, replaces the set).
    #[arg(long = "show-on", value_name = "TYPE")]
    pub show_on: Option<Vec<String>>,
}

impl SetArgs {
    fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            label: self.label.clone(),
            twitter_handle: self.twitter.clone(),
            show_on: self.show_on.clone(),
            cache_ttl_seconds: self.ttl,
        }
    }
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    let store = cli.config_store();
    match &args.action {
        ConfigAction::Show => {
            let config = store.load().await?;
            print_config(&config, cli)
        }
        ConfigAction::Path => show_path(&store, cli),
        ConfigAction::Init => {
            let config = store.init().await?;
            print_config(&config, cli)
        }
        ConfigAction::Set(set) => set_config(&store, set, cli).await,
        ConfigAction::Reset => reset_config(&store, cli).await,
    }
}

fn print_config(config: &GlobalConfig, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_config(config));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(config)?);
        }
    }
    Ok(())
}

fn show_path(store: &ConfigStore, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", store.path().display()),
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!(
                "{}",
                formatter.format(&serde_json::json!({ "settings": store.path() }))?
            );
        }
    }
    Ok(())
}

async fn set_config(store: &ConfigStore, set: &SetArgs, cli: &Cli) -> Result<()> {
    let mut config = store.load().await?;
    config.apply_settings(&set.to_update(), None);
    store.save(&config).await?;

    info!(path = %store.path().display(), "Saved settings");
    print_config(&config, cli)
}

async fn reset_config(store: &ConfigStore, cli: &Cli) -> Result<()> {
    let removed = store.delete().await?;

    match cli.format {
        OutputFormat::Text => {
            if removed {
                println!("Settings reset to defaults");
            } else {
                println!("No stored settings");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "removed": removed }));
        }
    }
    Ok(())
}
