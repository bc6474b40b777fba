//! Gifboard - wallet-connected client for a shared gif board
//!
//! This library provides the client-side orchestration around an external
//! signing agent and a remote append-only board account: session
//! establishment, one-time account provisioning, authenticated appends,
//! and the re-fetch that keeps the displayed record list authoritative.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `agent`: signing agent contract and the keyring-backed implementation
//! - `account`: board account contract, record model, and the RPC client
//! - `portal`: the connection state machine and the view projection
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//! - `commands`: CLI command handlers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use url::Url;
//! use gifboard::account::{AccountKey, RpcAccountService};
//! use gifboard::agent::KeyringAgent;
//! use gifboard::portal::Portal;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let agent = Arc::new(KeyringAgent::new("gifboard", "default"));
//!     let service = Arc::new(RpcAccountService::new(
//!         Url::parse("https://api.devnet.solana.com")?,
//!         "processed",
//!         Duration::from_secs(30),
//!     )?);
//!
//!     let mut portal = Portal::new(
//!         agent,
//!         service,
//!         AccountKey::new("board-account-key"),
//!         Duration::from_secs(30),
//!     );
//!     portal.start().await?;
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod portal;

// Re-export commonly used types
pub use account::{AccountKey, AccountService, AccountSnapshot, Record, RpcAccountService};
pub use agent::{KeyringAgent, Session, SigningAgent};
pub use config::Config;
pub use error::{GifboardError, Result};
pub use portal::{ConnectionStatus, Portal, RecordView, Screen};
