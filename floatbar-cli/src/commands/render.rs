//! Render command - produce the bar for a post.

use anyhow::{Result, bail};
use clap::Args;
use floatbar_core::RenderOverrides;
use floatbar_store::PageRender;
use tracing::info;

use super::PostArgs;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub post: PostArgs,

    /// Embed attribute `name=value`, e.g. `twitter=true` or `update=true`.
    /// With any attribute the content-path eligibility checks are skipped.
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    pub attrs: Vec<String>,
}

/// Runs the render command.
pub async fn run(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let post = args.post.context();
    let bar = cli.floating_bar();
    let mut page = PageRender::new();

    let rendered = if args.attrs.is_empty() {
        info!(post_id = %post.id, "Rendering bar on the content path");
        bar.render_post(&mut page, &post).await
    } else {
        let overrides = parse_attrs(&args.attrs)?;
        info!(post_id = %post.id, update = overrides.update(), "Rendering embedded bar");
        bar.render(&mut page, &post, &overrides).await
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            match &rendered {
                Some(rendered) => println!("{}", formatter.format_bar(rendered)),
                None => println!("{}", formatter.format_no_bar()),
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_bar(rendered.as_ref())?);
        }
    }

    Ok(())
}

/// Parses `name=value` pairs into embed overrides.
pub fn parse_attrs(attrs: &[String]) -> Result<RenderOverrides> {
    let mut pairs = Vec::with_capacity(attrs.len());
    for attr in attrs {
        let Some((name, value)) = attr.split_once('=') else {
            bail!("Invalid attribute '{attr}', expected NAME=VALUE");
        };
        pairs.push((name.trim(), value.trim()));
    }
    Ok(RenderOverrides::from_attrs(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatbar_core::ServiceId;

    #[test]
    fn test_parse_attrs_selects_services() {
        let attrs = vec!["twitter=true".to_string(), "update=true".to_string()];
        let overrides = parse_attrs(&attrs).unwrap();

        assert!(overrides.update());
        assert_eq!(overrides.selected().collect::<Vec<_>>(), vec![ServiceId::Twitter]);
    }

    #[test]
    fn test_parse_attrs_rejects_missing_value() {
        assert!(parse_attrs(&["twitter".to_string()]).is_err());
    }
}
