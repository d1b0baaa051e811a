#![deny(unsafe_code)]

//! iptv-relay CLI: command-line control plane for the relay appliance.

mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use iptv_relay_client::{ApiError, RelayClient, Transport};
use iptv_relay_config::ClientConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (mut config, from_file) = load_config(&cli.config).await?;
    init_tracing(cli.verbose, &config.logging.level);
    if !from_file {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    if let Some(server) = cli.server {
        config.server.base_url = server;
        config.validate()?;
    }

    let transport = Transport::builder(config.server.base_url.as_str())
        .timeout(config.timeout())
        .build()?;
    debug!(api_root = transport.api_root(), "client ready");
    let client = RelayClient::from_transport(transport);

    let output = commands::execute(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `RUST_LOG` wins, then `-v`, then the config file. Logs go to stderr so
/// stdout stays pure JSON.
fn init_tracing(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config(path: &Path) -> Result<(ClientConfig, bool)> {
    if path.exists() {
        Ok((ClientConfig::load(path).await?, true))
    } else {
        Ok((ClientConfig::default(), false))
    }
}

/// Backend failures print as the normalized `{message, detail?, status?}`
/// object; anything else as plain text.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ApiError>() {
        Some(api) => match serde_json::to_string_pretty(&api.to_body()) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("error: {api}"),
        },
        None => eprintln!("error: {err:#}"),
    }
}
