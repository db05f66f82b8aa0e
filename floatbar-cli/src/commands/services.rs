//! Services command - list supported services.

use anyhow::Result;
use floatbar_services::ServiceRegistry;
use floatbar_store::ConfigRepository;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the services command.
pub async fn run(cli: &Cli) -> Result<()> {
    info!("Listing services");

    let services = ServiceRegistry::all();
    let config = cli.config_store().load().await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_services_header());
            println!("{}", "─".repeat(70));
            for desc in services {
                println!("{}", formatter.format_service_line(desc, &config));
            }

            println!();
            println!(
                "Total: {} services ({} enabled)",
                services.len(),
                config.enabled_services().len()
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_services(services, &config)?);
        }
    }

    Ok(())
}
