//! Error types for Gifboard
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Gifboard operations
///
/// This enum encompasses all possible errors that can occur while
/// establishing a wallet session, provisioning the board account,
/// appending records, and loading configuration.
///
/// Note that "account not found" is deliberately *not* a variant:
/// an absent board account is an expected state, reported by
/// [`crate::account::AccountService::fetch`] as
/// [`crate::account::AccountSnapshot::Uninitialized`].
#[derive(Error, Debug)]
pub enum GifboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No compatible signing agent is reachable
    #[error("Signing agent unavailable: {0}")]
    AgentUnavailable(String),

    /// The user (or the agent on their behalf) declined to authorize
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    /// The board account has already been initialized; never retryable
    #[error("Board account is already initialized")]
    AlreadyInitialized,

    /// Board account provisioning failed
    #[error("Board account initialization failed: {0}")]
    InitializationFailed(String),

    /// A record append was rejected or lost
    #[error("Record append failed: {0}")]
    AppendFailed(String),

    /// A read failed for a reason other than "account not found";
    /// the last known-good record view is preserved
    #[error("Transient failure: {0}")]
    Transient(String),

    /// An operation that requires a live session was invoked without one
    #[error("No wallet session is connected")]
    NotConnected,

    /// An explicit connect was requested while a session already exists
    #[error("A wallet session is already connected")]
    AlreadyConnected,

    /// An operation that requires an initialized account was invoked
    /// while the account does not exist yet
    #[error("Board account has not been initialized yet")]
    AccountUninitialized,

    /// The remote endpoint returned a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Human-readable error message from the endpoint
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Gifboard operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
