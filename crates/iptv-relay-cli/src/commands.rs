//! Command dispatch: one client call per subcommand, result as JSON.

use anyhow::{Context, Result, bail};
use iptv_relay_client::RelayClient;
use iptv_relay_client::types::RelayConfigUpdate;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::{
    Commands, ConfigCommand, CronCommand, InterfacesCommand, LogsCommand, UdpxyCommand,
    UdpxyConfigCommand,
};

/// Run `command` against the backend and return the typed response as JSON.
pub async fn execute(client: &RelayClient, command: Commands) -> Result<Value> {
    match command {
        Commands::Status => to_json(client.status().get_status().await?),
        Commands::Network { token } => {
            to_json(client.status().get_network(token.as_deref()).await?)
        }
        Commands::Interfaces { command } => interfaces(client, command).await,
        Commands::Config { command } => config(client, command).await,
        Commands::Cron { command } => cron(client, command).await,
        Commands::Job { kind } => {
            info!(job = %kind, "requesting job");
            to_json(client.jobs().run(kind).await?)
        }
        Commands::Logs { command } => match command {
            LogsCommand::Show { limit } => to_json(client.logs().recent(limit).await?),
            LogsCommand::Clear => to_json(client.logs().clear().await?),
        },
        Commands::Udpxy { command } => udpxy(client, command).await,
        Commands::Health => to_json(client.system().health_check().await?),
    }
}

async fn interfaces(client: &RelayClient, command: InterfacesCommand) -> Result<Value> {
    match command {
        InterfacesCommand::List {
            physical,
            inventory: true,
        } => to_json(client.interfaces().list(physical).await?),
        InterfacesCommand::List { physical, .. } => {
            to_json(client.status().get_interfaces(physical).await?)
        }
        InterfacesCommand::Status { token } => {
            to_json(client.status().get_interface_status(token.as_deref()).await?)
        }
        InterfacesCommand::Show { name } => to_json(client.interfaces().get(&name).await?),
    }
}

async fn config(client: &RelayClient, command: ConfigCommand) -> Result<Value> {
    match command {
        ConfigCommand::Get => to_json(client.config().get().await?),
        ConfigCommand::Set { json } => {
            let update: RelayConfigUpdate =
                serde_json::from_str(&json).context("config update must be a JSON object")?;
            if update.is_empty() {
                bail!("config update has no fields");
            }
            to_json(client.config().update(&update).await?)
        }
    }
}

async fn cron(client: &RelayClient, command: CronCommand) -> Result<Value> {
    match command {
        CronCommand::Status => to_json(client.cron().status().await?),
        CronCommand::Install(args) => to_json(client.cron().install(&args.to_request()).await?),
        CronCommand::Remove => to_json(client.cron().remove().await?),
    }
}

async fn udpxy(client: &RelayClient, command: UdpxyCommand) -> Result<Value> {
    let udpxy = client.udpxy();
    match command {
        UdpxyCommand::Status => to_json(udpxy.status().await?),
        UdpxyCommand::Start => to_json(udpxy.start().await?),
        UdpxyCommand::Stop => to_json(udpxy.stop().await?),
        UdpxyCommand::Restart => to_json(udpxy.restart().await?),
        UdpxyCommand::Config {
            command: UdpxyConfigCommand::Get,
        } => to_json(udpxy.get_config().await?),
        UdpxyCommand::Config {
            command: UdpxyConfigCommand::Set(args),
        } => {
            let update = args.to_update();
            if update == Default::default() {
                bail!("udpxy config set needs at least one field");
            }
            to_json(udpxy.update_config(&update).await?)
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to encode response")
}
