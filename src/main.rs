//! Gifboard - wallet-connected gif board CLI
//!
//! Main entry point for the Gifboard client application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gifboard::cli::{Cli, Commands};
use gifboard::commands;
use gifboard::config::{default_config_path, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| default_config_path().to_string_lossy().to_string());
    let config = Config::load(&config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Status => {
            tracing::debug!("showing session and board status");
            commands::session::run_status(config).await
        }
        Commands::Connect => {
            tracing::info!("establishing wallet session");
            commands::session::run_connect(config).await
        }
        Commands::Disconnect => {
            tracing::info!("severing wallet session");
            commands::session::run_disconnect(config).await
        }
        Commands::Init => {
            tracing::info!("initializing board account");
            commands::board::run_init(config).await
        }
        Commands::Submit { link } => {
            tracing::info!("submitting gif link");
            commands::board::run_submit(config, link).await
        }
        Commands::List => {
            tracing::debug!("listing board contents");
            commands::board::run_list(config).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gifboard=debug" } else { "gifboard=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
