//! JSON-RPC board account service over HTTP
//!
//! [`RpcAccountService`] is the concrete [`AccountService`] implementation:
//! it POSTs JSON-RPC 2.0 requests to a single configured endpoint and maps
//! board-protocol error codes onto the client's error taxonomy.
//!
//! Error mapping:
//!
//! - `getBoardAccount` + code `-32001` -> `Ok(AccountSnapshot::Uninitialized)`
//!   (an absent account is a state, not a failure)
//! - `initializeBoardAccount` + code `-32002` -> `GifboardError::AlreadyInitialized`
//! - any other `initializeBoardAccount` error -> `GifboardError::InitializationFailed`
//! - any `appendBoardRecord` error -> `GifboardError::AppendFailed`

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::account::wire::{
    AppendRecordParams, BoardAccount, GetAccountParams, InitializeAccountParams, JsonRpcRequest,
    JsonRpcResponse, CODE_ACCOUNT_NOT_FOUND, CODE_ALREADY_INITIALIZED, METHOD_APPEND_RECORD,
    METHOD_GET_ACCOUNT, METHOD_INITIALIZE_ACCOUNT,
};
use crate::account::{AccountKey, AccountService, AccountSnapshot, Record};
use crate::error::{GifboardError, Result};

/// [`AccountService`] implementation speaking JSON-RPC 2.0 over HTTP.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use url::Url;
/// use gifboard::account::RpcAccountService;
///
/// # fn example() -> gifboard::error::Result<()> {
/// let service = RpcAccountService::new(
///     Url::parse("https://api.devnet.solana.com")?,
///     "processed",
///     Duration::from_secs(30),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RpcAccountService {
    /// Shared HTTP client; carries the per-request timeout.
    http: reqwest::Client,
    /// Board RPC endpoint.
    endpoint: Url,
    /// Read acknowledgement level forwarded on fetches.
    commitment: String,
    /// Monotonically increasing request ID counter.
    next_id: AtomicU64,
}

impl RpcAccountService {
    /// Creates a service bound to the given endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Board RPC endpoint URL
    /// * `commitment` - Read acknowledgement level forwarded on fetches
    /// * `timeout` - Per-request HTTP timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(endpoint: Url, commitment: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            commitment: commitment.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Issues one JSON-RPC call and returns the raw response object.
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<JsonRpcResponse> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        debug!("rpc call {} (id {})", method, id);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<JsonRpcResponse>()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl AccountService for RpcAccountService {
    async fn fetch(&self, key: &AccountKey) -> Result<AccountSnapshot> {
        let params = GetAccountParams {
            account: key.as_str().to_string(),
            commitment: self.commitment.clone(),
        };
        let response = self
            .call(METHOD_GET_ACCOUNT, serde_json::to_value(params)?)
            .await?;

        if let Some(error) = response.error {
            if error.code == CODE_ACCOUNT_NOT_FOUND {
                return Ok(AccountSnapshot::Uninitialized);
            }
            return Err(GifboardError::Rpc {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        let result = response.result.ok_or_else(|| {
            GifboardError::Rpc {
                code: 0,
                message: "response carried neither result nor error".to_string(),
            }
        })?;
        let account: BoardAccount = serde_json::from_value(result)?;
        Ok(AccountSnapshot::Ready(account.records))
    }

    async fn initialize(&self, key: &AccountKey, owner: &str) -> Result<()> {
        let params = InitializeAccountParams {
            account: key.as_str().to_string(),
            owner: owner.to_string(),
        };
        let response = self
            .call(METHOD_INITIALIZE_ACCOUNT, serde_json::to_value(params)?)
            .await
            .map_err(|e| GifboardError::InitializationFailed(e.to_string()))?;

        match response.error {
            None => Ok(()),
            Some(error) if error.code == CODE_ALREADY_INITIALIZED => {
                Err(GifboardError::AlreadyInitialized.into())
            }
            Some(error) => Err(GifboardError::InitializationFailed(format!(
                "{} (code {})",
                error.message, error.code
            ))
            .into()),
        }
    }

    async fn append(&self, key: &AccountKey, owner: &str, record: &Record) -> Result<()> {
        if record.link.trim().is_empty() {
            return Err(GifboardError::AppendFailed("empty record link".to_string()).into());
        }

        let params = AppendRecordParams {
            account: key.as_str().to_string(),
            owner: owner.to_string(),
            record: record.clone(),
        };
        let response = self
            .call(METHOD_APPEND_RECORD, serde_json::to_value(params)?)
            .await
            .map_err(|e| GifboardError::AppendFailed(e.to_string()))?;

        match response.error {
            None => Ok(()),
            Some(error) => Err(GifboardError::AppendFailed(format!(
                "{} (code {})",
                error.message, error.code
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RpcAccountService {
        RpcAccountService::new(
            Url::parse("http://127.0.0.1:1").unwrap(),
            "processed",
            Duration::from_millis(100),
        )
        .unwrap()
    }

    #[test]
    fn test_new_succeeds() {
        let _service = service();
    }

    #[test]
    fn test_request_ids_are_monotonic() {
        let service = service();
        let a = service.next_id.fetch_add(1, Ordering::Relaxed);
        let b = service.next_id.fetch_add(1, Ordering::Relaxed);
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_append_rejects_empty_link_without_network() {
        // Endpoint is unroutable; an empty link must fail before any I/O.
        let service = service();
        let key = AccountKey::new("board-1");

        let result = service.append(&key, "owner", &Record::new("   ")).await;

        let err = result.unwrap_err();
        let gifboard = err.downcast_ref::<GifboardError>().unwrap();
        assert!(matches!(gifboard, GifboardError::AppendFailed(_)));
    }
}
