//! Signing agent abstraction
//!
//! This module defines the [`SigningAgent`] trait, the client's contract
//! with an external, user-controlled agent that holds key material and
//! authorizes operations on the user's behalf. The concrete implementation
//! lives in a submodule:
//!
//! - [`keyring::KeyringAgent`] -- persists the agent secret in the OS
//!   keyring, so trust survives process restarts the way a browser/agent
//!   pairing does.
//!
//! # Design
//!
//! The trait is intentionally minimal: a silent probe for prior trust, an
//! explicit authorization request, and a revocation. The probe MUST NOT
//! fail for "agent absent" -- that is a normal outcome, signaled as
//! `Ok(None)`. Only the explicit request surfaces
//! [`crate::error::GifboardError::AgentUnavailable`] and
//! [`crate::error::GifboardError::AuthorizationDenied`].

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The client's local representation of a successful authorization.
///
/// A session carries only the agent's stable, opaque public identity.
/// It is process-local: every restart re-establishes it through
/// [`SigningAgent::probe_trusted_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque public identifier reported by the agent; stable for the
    /// lifetime of the client/agent pairing and used to attribute writes.
    pub identity: String,
}

impl Session {
    /// Creates a session for the given identity
    ///
    /// # Examples
    ///
    /// ```
    /// use gifboard::agent::Session;
    ///
    /// let session = Session::new("agent-pubkey");
    /// assert_eq!(session.identity, "agent-pubkey");
    /// ```
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

/// Contract to an external, user-controlled signing agent.
///
/// Implementations are injected as `Arc<dyn SigningAgent>` so tests can
/// substitute deterministic fakes.
#[async_trait]
pub trait SigningAgent: Send + Sync {
    /// Attempts silent authorization against previously established trust.
    ///
    /// # Returns
    ///
    /// `Ok(Some(session))` when prior trust exists, `Ok(None)` when it does
    /// not or when no agent is reachable. Absence is a normal outcome and
    /// MUST NOT be reported as an error.
    async fn probe_trusted_session(&self) -> Result<Option<Session>>;

    /// Explicitly requests authorization from the agent.
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AgentUnavailable` if no compatible agent is
    /// present, `GifboardError::AuthorizationDenied` if authorization is
    /// refused.
    async fn request_session(&self) -> Result<Session>;

    /// Severs local trust so a later probe returns `Ok(None)`.
    ///
    /// Revoking trust that does not exist is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the agent backend fails while removing
    /// existing trust.
    async fn revoke_session(&self) -> Result<()>;
}

pub mod keyring;

pub use self::keyring::KeyringAgent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new("abc");
        assert_eq!(session.identity, "abc");
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let session = Session::new("pubkey-1");
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_signing_agent_is_object_safe() {
        fn assert_object_safe(_: &dyn SigningAgent) {}
        let _ = assert_object_safe;
    }
}
