//! # SpaceBot
//!
//! Mock space-data HTTP API with a rule-based space knowledge chatbot.
//!
//! Usage:
//!   spacebot                      # Serve on 0.0.0.0:5000
//!   spacebot --port 8080          # Custom port
//!   spacebot --config ./my.toml   # Explicit config file

use anyhow::Result;
use clap::Parser;
use spacebot_core::SpaceBotConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spacebot",
    version,
    about = "🚀 SpaceBot — space knowledge chatbot and mock telemetry API"
)]
struct Cli {
    /// Bind host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to config file (default: ~/.spacebot/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "spacebot=debug,tower_http=debug"
    } else {
        "spacebot=info,spacebot_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Load config, CLI flags win over file values
    let mut config = match &cli.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            SpaceBotConfig::load_from(std::path::Path::new(&expanded))?
        }
        None => SpaceBotConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    spacebot_gateway::start(&config.gateway).await
}
