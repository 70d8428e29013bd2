mod commands;
mod output;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use digitalocean_api::Client;
use tracing_subscriber::filter::Directive;

use crate::output::OutputFormat;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser)]
#[command(name = "digitalocean")]
#[command(about = "Manage DigitalOcean droplets, images, domains and SSH keys")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API token (read from DIGITALOCEAN_TOKEN when not given)
    #[arg(long, env = "DIGITALOCEAN_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, inspect, create and act on droplets
    Droplets(commands::droplets::DropletsArgs),
    /// List, inspect and manage images
    Images(commands::images::ImagesArgs),
    /// List regions
    Regions(commands::PageArgs),
    /// List droplet sizes
    Sizes(commands::PageArgs),
    /// Manage domains
    Domains(commands::domains::DomainsArgs),
    /// Manage the DNS records of a domain
    Records(commands::domains::RecordsArgs),
    /// Manage SSH keys
    Keys(commands::keys::KeysArgs),
    /// Inspect account actions
    Actions(commands::actions::ActionsArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("digitalocean=info".parse::<Directive>()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;
    let client = build_client(cli.token.as_deref())?;

    match &cli.command {
        Commands::Droplets(args) => commands::droplets::run(args, &client, &format)?,
        Commands::Images(args) => commands::images::run(args, &client, &format)?,
        Commands::Regions(args) => commands::regions::run_regions(args, &client, &format)?,
        Commands::Sizes(args) => commands::regions::run_sizes(args, &client, &format)?,
        Commands::Domains(args) => commands::domains::run_domains(args, &client, &format)?,
        Commands::Records(args) => commands::domains::run_records(args, &client, &format)?,
        Commands::Keys(args) => commands::keys::run(args, &client, &format)?,
        Commands::Actions(args) => commands::actions::run(args, &client, &format)?,
    }

    Ok(())
}

fn build_client(token: Option<&str>) -> Result<Client> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("no API token: pass --token or set DIGITALOCEAN_TOKEN"))?;

    let timeout = env_u64("DIGITALOCEAN_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
    let mut builder = Client::builder(token).timeout(Duration::from_secs(timeout));
    if let Ok(base_url) = std::env::var("DIGITALOCEAN_API_URL") {
        tracing::debug!("Using API base URL {}", base_url);
        builder = builder.base_url(&base_url);
    }
    Ok(builder.build()?)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
