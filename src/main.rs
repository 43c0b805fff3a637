mod api;
mod cli;
mod config;
mod error;
mod orchestrator;
mod report;
mod segmented;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use api::CloudflareGateway;
use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let command = cli::validate(cli.command).unwrap_or_else(|err| err.exit());

    let credentials = config::load(&cli.credentials).context("Error loading credentials")?;
    let gateway = CloudflareGateway::new(credentials.api_token, credentials.zone_id);

    let context = match command {
        Command::Add(_) => "Error adding DNS record",
        Command::GetAll | Command::Get(_) => "Error getting DNS records",
    };
    let output = orchestrator::execute(&gateway, command)
        .await
        .context(context)?;

    println!("{}", output);
    Ok(())
}
