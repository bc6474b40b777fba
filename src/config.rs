//! Configuration management for Gifboard
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//!
//! The board account key is configuration, not state: it identifies the
//! single shared append-only account every client reads and writes. It is
//! injected into the account service at construction and never held as
//! ambient module state.

use crate::error::{GifboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Main configuration structure for Gifboard
///
/// This structure holds all configuration needed by the client: the
/// board account identity, the RPC endpoint settings, and the signing
/// agent profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Board account configuration
    #[serde(default)]
    pub account: AccountConfig,

    /// RPC endpoint configuration
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Signing agent configuration
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Board account configuration
///
/// The `key` identifies the shared board account. It is generated once,
/// outside this client, and distributed as configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountConfig {
    /// Fixed identifier of the shared board account
    #[serde(default)]
    pub key: String,
}

/// RPC endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Base URL of the board RPC endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Timeout applied to every agent and network operation (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Read acknowledgement level forwarded on fetches
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

fn default_endpoint() -> String {
    "https://api.devnet.solana.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_commitment() -> String {
    "processed".to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            commitment: default_commitment(),
        }
    }
}

/// Signing agent configuration
///
/// Names the keyring entry under which the local agent persists its
/// secret. Separate profiles allow separate identities on one machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Keyring service name
    #[serde(default = "default_agent_service")]
    pub service: String,

    /// Keyring profile (user) name
    #[serde(default = "default_agent_profile")]
    pub profile: String,
}

fn default_agent_service() -> String {
    "gifboard".to_string()
}

fn default_agent_profile() -> String {
    "default".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            service: default_agent_service(),
            profile: default_agent_profile(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GifboardError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GifboardError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(key) = std::env::var("GIFBOARD_ACCOUNT_KEY") {
            self.account.key = key;
        }

        if let Ok(endpoint) = std::env::var("GIFBOARD_RPC_ENDPOINT") {
            self.rpc.endpoint = endpoint;
        }

        if let Ok(profile) = std::env::var("GIFBOARD_AGENT_PROFILE") {
            self.agent.profile = profile;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(account) = &cli.account {
            self.account.key = account.clone();
        }

        if let Some(endpoint) = &cli.endpoint {
            self.rpc.endpoint = endpoint.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::Config` if the account key is missing, the
    /// endpoint is not a valid http(s) URL, or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.account.key.trim().is_empty() {
            return Err(GifboardError::Config(
                "account.key must be set (the shared board account identifier)".to_string(),
            )
            .into());
        }

        let endpoint = Url::parse(&self.rpc.endpoint)
            .map_err(|e| GifboardError::Config(format!("Invalid rpc.endpoint: {}", e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(GifboardError::Config(format!(
                "rpc.endpoint must be http or https, got: {}",
                endpoint.scheme()
            ))
            .into());
        }

        if self.rpc.timeout_seconds == 0 {
            return Err(GifboardError::Config(
                "rpc.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.agent.service.trim().is_empty() || self.agent.profile.trim().is_empty() {
            return Err(GifboardError::Config(
                "agent.service and agent.profile must be non-empty".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Parsed RPC endpoint URL
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::Config` if the endpoint does not parse;
    /// call [`Config::validate`] first to report this up front
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.rpc.endpoint)
            .map_err(|e| GifboardError::Config(format!("Invalid rpc.endpoint: {}", e)).into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: AccountConfig::default(),
            rpc: RpcConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

/// Default config file location
///
/// Prefers `./config/config.yaml` when present (repository layout),
/// falling back to the platform config directory.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from("config/config.yaml");
    if local.exists() {
        return local;
    }

    directories::ProjectDirs::from("", "", "gifboard")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
        .unwrap_or(local)
}
