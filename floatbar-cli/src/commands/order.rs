//! Order command - the reorder endpoint.

use anyhow::Result;
use clap::Args;
use floatbar_store::ConfigRepository;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Services to enable, in display order. Unlisted services are disabled.
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,
}

/// Runs the order command.
pub async fn run(args: &OrderArgs, cli: &Cli) -> Result<()> {
    let bar = cli.floating_bar();
    let saved = bar.save_order(&args.services).await?;
    let enabled = bar.config().load().await?.enabled_services();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_order(&enabled));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_order(saved, &enabled)?);
        }
    }

    Ok(())
}
