//! Suppress command - the per-post "hide the bar" switch.

use anyhow::Result;
use clap::Args;
use floatbar_core::PostId;

use crate::{Cli, OutputFormat};

/// Arguments for the suppress command.
#[derive(Args)]
pub struct SuppressArgs {
    /// Host post id.
    #[arg(long)]
    pub post_id: u64,

    /// Show the bar again instead of hiding it.
    #[arg(long)]
    pub off: bool,
}

/// Runs the suppress command.
pub async fn run(args: &SuppressArgs, cli: &Cli) -> Result<()> {
    let suppressed = !args.off;
    cli.floating_bar()
        .set_suppressed(PostId(args.post_id), suppressed)
        .await?;

    match cli.format {
        OutputFormat::Text => {
            let state = if suppressed { "hidden" } else { "shown" };
            println!("Bar {state} on post {}", args.post_id);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "postId": args.post_id, "suppressed": suppressed })
            );
        }
    }

    Ok(())
}
