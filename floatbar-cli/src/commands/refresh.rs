//! Refresh command - bring a post's cached counts up to date.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::PostArgs;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the refresh command.
#[derive(Args)]
pub struct RefreshArgs {
    #[command(flatten)]
    pub post: PostArgs,

    /// Refetch even if the cached counts are within their TTL.
    #[arg(long)]
    pub force: bool,
}

/// Runs the refresh command.
pub async fn run(args: &RefreshArgs, cli: &Cli) -> Result<()> {
    let post = args.post.context();
    info!(post_id = %post.id, force = args.force, "Refreshing counts");

    let freshness = cli.floating_bar().refresh_post(&post, args.force).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_freshness(&freshness));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_freshness(&freshness)?);
        }
    }

    Ok(())
}
