//! Session command handlers: status, connect, disconnect

use colored::Colorize;
use tracing::warn;

use crate::commands::{build_portal, render_screen};
use crate::config::Config;
use crate::error::Result;

/// Show the current session and board state
///
/// Probes for a prior trusted session silently and renders whichever
/// view the state machine lands on. A failed refresh is reported as a
/// notice, not a failure.
pub async fn run_status(config: Config) -> Result<()> {
    let mut portal = build_portal(&config)?;

    if let Err(e) = portal.start().await {
        warn!("initial refresh failed: {}", e);
        println!("{}", format!("Note: {}", e).yellow());
    }

    if let Some(session) = portal.session() {
        println!("Connected as {}", session.identity.green());
    }
    render_screen(&portal);
    Ok(())
}

/// Establish a wallet session with the signing agent
pub async fn run_connect(config: Config) -> Result<()> {
    let mut portal = build_portal(&config)?;

    // Silent probe first; an existing pairing makes connect a no-op.
    if let Err(e) = portal.start().await {
        warn!("initial refresh failed: {}", e);
    }

    if let Some(session) = portal.session() {
        println!(
            "{} {}",
            "Already connected as".green(),
            session.identity.green()
        );
        render_screen(&portal);
        return Ok(());
    }

    portal.connect().await?;

    if let Some(session) = portal.session() {
        println!("{} {}", "Connected as".green(), session.identity.green());
    }
    render_screen(&portal);
    Ok(())
}

/// Sever the wallet session and local agent trust
pub async fn run_disconnect(config: Config) -> Result<()> {
    let mut portal = build_portal(&config)?;
    portal.start().await.ok();

    if portal.session().is_none() {
        println!("{}", "No wallet session to disconnect.".yellow());
        return Ok(());
    }

    portal.disconnect().await;
    println!("{}", "Disconnected.".green());
    Ok(())
}
