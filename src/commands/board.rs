//! Board command handlers: init, submit, list

use anyhow::anyhow;
use colored::Colorize;

use crate::commands::{build_portal, render_screen};
use crate::config::Config;
use crate::error::{GifboardError, Result};
use crate::portal::Portal;

/// Builds a portal and requires an existing trusted session.
///
/// Board operations are authenticated writes or reads on behalf of a
/// session; they never prompt for authorization themselves. The user
/// establishes trust explicitly with `gifboard connect`.
async fn connected_portal(config: &Config) -> Result<Portal> {
    let mut portal = build_portal(config)?;

    // A transient refresh failure here is not fatal: the session may be
    // live with an unknown view, and every board operation re-fetches.
    if let Err(e) = portal.start().await {
        tracing::warn!("initial refresh failed: {}", e);
    }

    if portal.session().is_none() {
        println!("{}", "No wallet session.".yellow());
        println!("Run {} first.", "gifboard connect".cyan());
        return Err(anyhow!(GifboardError::NotConnected));
    }

    Ok(portal)
}

/// One-time initialization of the shared board account
pub async fn run_init(config: Config) -> Result<()> {
    let mut portal = connected_portal(&config).await?;

    match portal.initialize_account().await {
        Ok(()) => {
            println!("{}", "Board account initialized.".green());
            render_screen(&portal);
            Ok(())
        }
        Err(e) => {
            if matches!(
                e.downcast_ref::<GifboardError>(),
                Some(GifboardError::AlreadyInitialized)
            ) {
                println!("{}", "Board account is already initialized.".yellow());
                render_screen(&portal);
                return Ok(());
            }
            Err(e)
        }
    }
}

/// Append one gif link to the board
pub async fn run_submit(config: Config, link: String) -> Result<()> {
    if link.trim().is_empty() {
        println!("{}", "No gif link provided.".yellow());
        return Ok(());
    }

    let mut portal = connected_portal(&config).await?;
    portal.submit_record(&link).await?;

    println!("{}", "Gif submitted.".green());
    render_screen(&portal);
    Ok(())
}

/// Fetch and display the current board contents
pub async fn run_list(config: Config) -> Result<()> {
    let mut portal = connected_portal(&config).await?;
    portal.refresh().await?;
    render_screen(&portal);
    Ok(())
}
