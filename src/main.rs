use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use coolbeans::config::API_TOKEN_VAR;
use coolbeans::dns::{DynRecordApi, RecordApi};
use coolbeans::error::Error;
use coolbeans::hosts::{DynHostTable, HostEntry};
use coolbeans::{CloudflareApi, Config, EnvHostTable, InMemoryHostTable};
use is_terminal::IsTerminal;
use rand::RngCore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coolbeans")]
#[command(about = "Authenticated dynamic DNS: serve the update endpoint, register hostnames, ping home")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the update API server
    Serve {
        /// Path to the JSON configuration file
        config: PathBuf,
    },

    /// Sign and send one update ping to a running server
    Ping {
        /// Endpoint URL, e.g. https://dns.example.com/update
        #[arg(env = "COOLBEANS_URL")]
        url: String,
        /// Hostname to update
        #[arg(env = "COOLBEANS_HOSTNAME")]
        hostname: String,
        /// Shared secret for the hostname
        #[arg(env = "COOLBEANS_SECRET")]
        secret: String,
    },

    /// Register a hostname: discover its zone and store a shared secret
    Add {
        /// Path to the JSON configuration file
        config: PathBuf,
        /// Fully-qualified hostname to register
        hostname: String,
        /// Shared secret; a random one is generated when omitted
        #[arg(long)]
        secret: Option<String>,
    },

    /// Deregister a hostname
    Remove {
        /// Path to the JSON configuration file
        config: PathBuf,
        /// Hostname to remove
        hostname: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Ping {
            url,
            hostname,
            secret,
        } => {
            let message = coolbeans::pinger::ping(&url, &hostname, &secret).await?;
            println!("{message}");
            Ok(())
        }
        Commands::Add {
            config,
            hostname,
            secret,
        } => add(&config, hostname, secret).await,
        Commands::Remove { config, hostname } => remove(&config, &hostname),
    }
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coolbeans=info".into()),
        )
        .init();
}

async fn serve(config_path: &Path) -> Result<()> {
    let config = Arc::new(Config::try_from_file(config_path)?);

    if std::io::stdout().is_terminal() {
        println!("{}", coolbeans::beans::BEANS);
    }

    let hosts: DynHostTable = if config.hosts.is_empty() {
        tracing::info!("no hosts in config file, using environment variable lookup");
        Arc::new(EnvHostTable)
    } else {
        tracing::info!("{} hostname(s) registered in config file", config.hosts.len());
        Arc::new(InMemoryHostTable::from(config.hosts.clone()))
    };
    let records: DynRecordApi = Arc::new(record_api(&config)?);

    tracing::info!("API listening on {}", &config.api_bind_addr);
    let api_server = coolbeans::new_api(config, hosts, records);
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        Ok(api_res) = api_handle => {
            if let Err(err) = api_res {
                return Err(err.into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn record_api(config: &Config) -> Result<CloudflareApi> {
    let token = config.api_token().ok_or_else(|| {
        anyhow!("no DNS API token: set {API_TOKEN_VAR} or \"api_token\" in the config file")
    })?;
    Ok(CloudflareApi::new(token)?)
}

async fn add(config_path: &Path, hostname: String, secret: Option<String>) -> Result<()> {
    let mut config = Config::try_from_file(config_path)?;
    let records = record_api(&config)?;

    let zones = records.list_zones().await?;
    let zone = coolbeans::zone::find_enclosing_zone(&hostname, &zones)
        .ok_or_else(|| Error::NoEnclosingZone(hostname.clone()))?;
    let shared_secret = secret.unwrap_or_else(random_secret);

    println!(
        "registering \"{hostname}\" in zone {} ({})",
        zone.name, zone.id
    );
    config.hosts.insert(
        hostname,
        HostEntry {
            zone_id: zone.id.clone(),
            shared_secret: shared_secret.clone(),
        },
    );
    config.save(config_path)?;
    println!("shared secret: {shared_secret}");
    Ok(())
}

fn random_secret() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn remove(config_path: &Path, hostname: &str) -> Result<()> {
    let mut config = Config::try_from_file(config_path)?;
    if config.hosts.remove(hostname).is_none() {
        println!("hostname \"{hostname}\" not found in configuration");
        return Ok(());
    }
    config.save(config_path)?;
    println!("removed \"{hostname}\"");
    Ok(())
}
