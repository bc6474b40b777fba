//! Command handlers for the Gifboard CLI
//!
//! Each handler builds a [`crate::portal::Portal`] from configuration,
//! runs the silent session probe, performs one user action, and renders
//! the resulting view.

pub mod board;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::account::{AccountKey, RpcAccountService};
use crate::agent::KeyringAgent;
use crate::config::Config;
use crate::error::Result;
use crate::portal::{Portal, Screen};

/// Builds a portal wired to the keyring agent and the RPC account service.
pub(crate) fn build_portal(config: &Config) -> Result<Portal> {
    let agent = KeyringAgent::new(config.agent.service.clone(), config.agent.profile.clone());
    let service = RpcAccountService::new(
        config.endpoint_url()?,
        config.rpc.commitment.clone(),
        Duration::from_secs(config.rpc.timeout_seconds),
    )?;

    Ok(Portal::new(
        Arc::new(agent),
        Arc::new(service),
        AccountKey::new(config.account.key.clone()),
        Duration::from_secs(config.rpc.timeout_seconds),
    ))
}

/// Renders the portal's current view to stdout.
pub(crate) fn render_screen(portal: &Portal) {
    match portal.screen() {
        Screen::Connect => {
            println!("{}", "No wallet session.".yellow());
            println!("Run {} to establish one.", "gifboard connect".cyan());
        }
        Screen::Initialize => {
            println!("{}", "Board account does not exist yet.".yellow());
            println!(
                "Run {} for its one-time initialization.",
                "gifboard init".cyan()
            );
        }
        Screen::Board(records) => {
            if records.is_empty() {
                println!("{}", "The board is empty.".dimmed());
            } else {
                for (index, record) in records.iter().enumerate() {
                    println!("{:>4}  {}", index + 1, record.link);
                }
            }
            println!();
            println!(
                "Use {} to add a gif.",
                "gifboard submit <link>".cyan()
            );
        }
    }
}
