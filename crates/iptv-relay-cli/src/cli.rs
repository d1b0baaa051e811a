//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use iptv_relay_client::types::{CronSetupRequest, Schedule, UdpxyConfigUpdate};
use iptv_relay_client::JobKind;
use iptv_relay_config::DEFAULT_CONFIG_FILE;

/// Control plane for the IPTV relay appliance.
#[derive(Parser, Debug)]
#[command(name = "iptv-relay", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Backend origin, e.g. http://192.168.1.241:8088 (overrides the config file).
    #[arg(short, long)]
    pub server: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show output files, last job and udpxy state.
    Status,

    /// Show the first interface a token resolves to.
    Network {
        /// Interface name, role alias, or comma-joined mix of both.
        token: Option<String>,
    },

    /// Inspect network interfaces.
    Interfaces {
        #[command(subcommand)]
        command: InterfacesCommand,
    },

    /// Read or change the relay configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Manage the regeneration schedule.
    Cron {
        #[command(subcommand)]
        command: CronCommand,
    },

    /// Trigger a regeneration job (m3u, epg, logos).
    Job { kind: JobKind },

    /// Read or clear the backend log.
    Logs {
        #[command(subcommand)]
        command: LogsCommand,
    },

    /// Control the udpxy proxy.
    Udpxy {
        #[command(subcommand)]
        command: UdpxyCommand,
    },

    /// Run the backend health check.
    Health,
}

#[derive(Subcommand, Debug)]
pub enum InterfacesCommand {
    /// List interfaces.
    List {
        /// Only physical adapters (true) or explicitly all (false).
        #[arg(long)]
        physical: Option<bool>,

        /// Query /interfaces instead of /status/interfaces_list.
        #[arg(long)]
        inventory: bool,
    },

    /// Resolve a token to interface detail.
    Status {
        /// Interface name, role alias, or comma-joined mix of both.
        token: Option<String>,
    },

    /// Resolve a token through the /interfaces/{name} route.
    Show { name: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the stored configuration.
    Get,

    /// Merge a JSON object of fields into the stored configuration.
    Set {
        /// e.g. '{"local_iface": "ens192"}'
        json: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CronCommand {
    /// Show whether a schedule is installed.
    Status,

    /// Install or replace the schedule.
    Install(CronInstallArgs),

    /// Remove the schedule.
    Remove,
}

#[derive(Args, Debug)]
pub struct CronInstallArgs {
    /// Run every H hours.
    #[arg(long, conflicts_with_all = ["cron_hour", "cron_minute"])]
    pub interval_hours: Option<u32>,

    /// Run every M minutes.
    #[arg(long, conflicts_with_all = ["cron_hour", "cron_minute"])]
    pub interval_minutes: Option<u32>,

    /// Cron hour field for a fixed-time schedule.
    #[arg(long, requires = "cron_minute")]
    pub cron_hour: Option<String>,

    /// Cron minute field for a fixed-time schedule.
    #[arg(long, requires = "cron_hour")]
    pub cron_minute: Option<String>,

    /// Interface to bind the scheduled job to.
    #[arg(long)]
    pub source_iface: Option<String>,
}

impl CronInstallArgs {
    pub fn to_request(&self) -> CronSetupRequest {
        let schedule = match (&self.cron_hour, &self.cron_minute) {
            (Some(hour), Some(minute)) => Schedule::cron(hour.as_str(), minute.as_str()),
            _ => Schedule::interval(self.interval_hours, self.interval_minutes),
        };
        CronSetupRequest {
            schedule,
            source_iface: self.source_iface.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum LogsCommand {
    /// Print recent entries.
    Show {
        /// Number of entries (backend default 200).
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Clear the log buffer.
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum UdpxyCommand {
    Status,
    Start,
    Stop,
    Restart,

    /// Read or change the proxy configuration.
    Config {
        #[command(subcommand)]
        command: UdpxyConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum UdpxyConfigCommand {
    Get,

    /// Change the given fields. Applied on the next restart.
    Set(UdpxyConfigArgs),
}

#[derive(Args, Debug)]
pub struct UdpxyConfigArgs {
    #[arg(long)]
    pub enabled: Option<bool>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub bind_address: Option<String>,

    #[arg(long)]
    pub source_iface: Option<String>,

    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl UdpxyConfigArgs {
    pub fn to_update(&self) -> UdpxyConfigUpdate {
        UdpxyConfigUpdate {
            enabled: self.enabled,
            port: self.port,
            bind_address: self.bind_address.clone(),
            source_iface: self.source_iface.clone(),
            max_connections: self.max_connections,
            ..Default::default()
        }
    }
}
