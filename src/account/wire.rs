//! Board protocol wire types and JSON-RPC 2.0 primitives
//!
//! This module defines the small JSON-RPC surface the client speaks to the
//! board endpoint. All types derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`. `Option<>` fields omit their key from JSON when `None`
//! via `#[serde(skip_serializing_if = "Option::is_none")]`.

use serde::{Deserialize, Serialize};

use crate::account::Record;

// ---------------------------------------------------------------------------
// Method constants
// ---------------------------------------------------------------------------

/// Read the board account's current contents.
pub const METHOD_GET_ACCOUNT: &str = "getBoardAccount";
/// Provision the board account (one-time).
pub const METHOD_INITIALIZE_ACCOUNT: &str = "initializeBoardAccount";
/// Append one record to the board account.
pub const METHOD_APPEND_RECORD: &str = "appendBoardRecord";

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// No account exists at the requested key. Expected, drives provisioning.
pub const CODE_ACCOUNT_NOT_FOUND: i64 = -32001;
/// The account already exists; initialization is non-retryable.
pub const CODE_ALREADY_INITIALIZED: i64 = -32002;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 wire types
// ---------------------------------------------------------------------------

/// A JSON-RPC 2.0 request object.
///
/// `jsonrpc` MUST always be `"2.0"`.
///
/// # Examples
///
/// ```
/// use gifboard::account::wire::JsonRpcRequest;
///
/// let req = JsonRpcRequest::new(1, "getBoardAccount", serde_json::json!({"account": "k"}));
/// assert_eq!(req.jsonrpc, "2.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version identifier; always `"2.0"`.
    pub jsonrpc: String,
    /// Request correlation identifier.
    pub id: u64,
    /// The method name to invoke.
    pub method: String,
    /// Method parameters.
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    /// Builds a request with the protocol version pinned to `"2.0"`
    pub fn new(id: u64, method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response object.
///
/// Exactly one of `result` or `error` is present in a valid response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version identifier; always `"2.0"`.
    pub jsonrpc: String,
    /// Mirrors the request identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Success payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Failure payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code; see the `CODE_*` constants for board-specific codes.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured error data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Board payloads
// ---------------------------------------------------------------------------

/// Result payload of [`METHOD_GET_ACCOUNT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardAccount {
    /// Records in append order.
    pub records: Vec<Record>,
}

/// Parameters of [`METHOD_GET_ACCOUNT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAccountParams {
    /// The board account identifier.
    pub account: String,
    /// Read acknowledgement level.
    pub commitment: String,
}

/// Parameters of [`METHOD_INITIALIZE_ACCOUNT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeAccountParams {
    /// The board account identifier.
    pub account: String,
    /// Identity of the authorizing session.
    pub owner: String,
}

/// Parameters of [`METHOD_APPEND_RECORD`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendRecordParams {
    /// The board account identifier.
    pub account: String,
    /// Identity of the authorizing session.
    pub owner: String,
    /// The record to append.
    pub record: Record,
}
