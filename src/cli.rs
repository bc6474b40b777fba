//! Command-line interface definition for Gifboard
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for session management and board operations.

use clap::{Parser, Subcommand};

/// Gifboard - wallet-connected client for a shared gif board
///
/// Connect a signing agent, provision the shared board account once,
/// and append gif links to it.
#[derive(Parser, Debug, Clone)]
#[command(name = "gifboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the board account key from config
    #[arg(long, env = "GIFBOARD_ACCOUNT_KEY")]
    pub account: Option<String>,

    /// Override the RPC endpoint from config
    #[arg(long, env = "GIFBOARD_RPC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Gifboard
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the current session and board state
    Status,

    /// Establish a wallet session with the signing agent
    Connect,

    /// Sever the wallet session and local agent trust
    Disconnect,

    /// One-time initialization of the shared board account
    Init,

    /// Append one gif link to the board
    Submit {
        /// The gif link to append
        link: String,
    },

    /// Fetch and display the current board contents
    List,
}

impl Cli {
    /// Parses command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
