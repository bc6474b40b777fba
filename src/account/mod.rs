//! Remote board account abstraction
//!
//! This module defines the [`AccountService`] trait, the client's contract
//! with the remote append-only board account, along with the record and
//! snapshot types that cross that boundary. The concrete implementation
//! lives in submodules:
//!
//! - [`rpc::RpcAccountService`] -- JSON-RPC 2.0 over HTTP.
//! - [`wire`] -- the JSON-RPC request/response/error wire types.
//!
//! # Design
//!
//! Reads are idempotent; writes are not, and the caller owns retry policy.
//! "Account not found" is an expected state, not an error: `fetch` reports
//! it as [`AccountSnapshot::Uninitialized`] so callers can distinguish a
//! genuinely absent account from a transient read failure.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed identifier of the shared board account.
///
/// Generated once outside this client and injected from configuration at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey(String);

impl AccountKey {
    /// Wraps a raw account identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use gifboard::account::AccountKey;
    ///
    /// let key = AccountKey::new("board-1");
    /// assert_eq!(key.as_str(), "board-1");
    /// ```
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One appended unit of user-supplied data.
///
/// Immutable once appended; ordering is append order as reported by the
/// account. The wire field name matches the original account layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// User-supplied link referencing external media
    #[serde(rename = "gifLink")]
    pub link: String,
}

impl Record {
    /// Creates a record for the given link
    ///
    /// # Examples
    ///
    /// ```
    /// use gifboard::account::Record;
    ///
    /// let record = Record::new("https://example.com/a.gif");
    /// assert_eq!(record.link, "https://example.com/a.gif");
    /// ```
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

/// The state of the board account as reported by a successful fetch.
///
/// `Uninitialized` is a distinguished marker, semantically different from
/// `Ready(vec![])`: the former means the account does not exist yet and
/// drives the provisioning view; the latter is an existing, empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSnapshot {
    /// No account exists at the configured key
    Uninitialized,
    /// The account exists and holds these records, in append order
    Ready(Vec<Record>),
}

/// Contract to the remote read/append board account.
///
/// All operations may suspend on network I/O. Implementations are injected
/// as `Arc<dyn AccountService>` so tests can substitute in-memory fakes.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches the current account contents.
    ///
    /// Read-only; mutates neither remote nor local state. An absent account
    /// is reported as `Ok(AccountSnapshot::Uninitialized)`, never as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than "account not found"
    /// (network, endpoint, decoding). Callers treat these as transient and
    /// preserve their last known-good view.
    async fn fetch(&self, key: &AccountKey) -> Result<AccountSnapshot>;

    /// Provisions the account.
    ///
    /// Called at most meaningfully once in the account's lifetime.
    ///
    /// # Arguments
    ///
    /// * `key` - The board account identifier
    /// * `owner` - Identity of the authorizing session
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AlreadyInitialized` when the account already
    /// exists -- a distinct, non-retryable condition, never a silent
    /// success -- and `GifboardError::InitializationFailed` otherwise.
    async fn initialize(&self, key: &AccountKey, owner: &str) -> Result<()>;

    /// Appends one record.
    ///
    /// Does not return the resulting list; callers must re-fetch to observe
    /// it. Empty links are invalid at this layer too, even though the
    /// caller is expected to reject them before submission.
    ///
    /// # Arguments
    ///
    /// * `key` - The board account identifier
    /// * `owner` - Identity of the authorizing session
    /// * `record` - The record to append
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AppendFailed` when the write is rejected or
    /// lost.
    async fn append(&self, key: &AccountKey, owner: &str, record: &Record) -> Result<()>;
}

pub mod rpc;
pub mod wire;

pub use self::rpc::RpcAccountService;
