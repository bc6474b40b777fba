//! OS-keyring-backed signing agent
//!
//! [`KeyringAgent`] keeps the agent secret in the operating system keyring
//! under a configurable service/profile pair. The public identity exposed
//! to the rest of the client is a digest of that secret, never the secret
//! itself.
//!
//! Trust semantics map directly onto the keyring:
//!
//! - [`SigningAgent::probe_trusted_session`] reads the entry silently; a
//!   missing entry (or an unreachable keyring) means "no prior trust" and
//!   yields `Ok(None)`.
//! - [`SigningAgent::request_session`] provisions the secret on first use
//!   and stores it, establishing trust that survives process restarts.
//! - [`SigningAgent::revoke_session`] deletes the entry.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use keyring::Entry;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::agent::{Session, SigningAgent};
use crate::error::{GifboardError, Result};

/// Signing agent whose secret lives in the OS keyring.
///
/// # Examples
///
/// ```no_run
/// use gifboard::agent::KeyringAgent;
///
/// let agent = KeyringAgent::new("gifboard", "default");
/// ```
#[derive(Debug, Clone)]
pub struct KeyringAgent {
    /// Keyring service name.
    service: String,
    /// Keyring profile (user) name.
    profile: String,
}

impl KeyringAgent {
    /// Creates an agent bound to the given keyring service/profile pair
    ///
    /// # Arguments
    ///
    /// * `service` - Keyring service name
    /// * `profile` - Keyring profile (user) name
    pub fn new(service: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            profile: profile.into(),
        }
    }

    fn entry(&self) -> std::result::Result<Entry, keyring::Error> {
        Entry::new(&self.service, &self.profile)
    }

    /// Derives the opaque public identity from a stored secret.
    ///
    /// The identity is `base64url(sha256(secret))`: stable for the lifetime
    /// of the pairing, safe to log and to send to the account service.
    pub(crate) fn identity_of(secret: &str) -> String {
        let digest = Sha256::digest(secret.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }

    fn generate_secret() -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[async_trait]
impl SigningAgent for KeyringAgent {
    /// Silent probe: reads the keyring entry without provisioning anything.
    ///
    /// Every failure mode short of success is reported as `Ok(None)`; a
    /// silent probe must never surface a user-visible error.
    async fn probe_trusted_session(&self) -> Result<Option<Session>> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                debug!("keyring unavailable during silent probe: {}", e);
                return Ok(None);
            }
        };

        match entry.get_password() {
            Ok(secret) => {
                let session = Session::new(Self::identity_of(&secret));
                debug!("silent probe found trusted session: {}", session.identity);
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                debug!("silent probe failed: {}", e);
                Ok(None)
            }
        }
    }

    /// Explicit authorization: loads the existing secret or provisions a
    /// new one and stores it as durable trust.
    async fn request_session(&self) -> Result<Session> {
        let entry = self
            .entry()
            .map_err(|e| GifboardError::AgentUnavailable(e.to_string()))?;

        match entry.get_password() {
            Ok(secret) => Ok(Session::new(Self::identity_of(&secret))),
            Err(keyring::Error::NoEntry) => {
                let secret = Self::generate_secret();
                entry.set_password(&secret).map_err(|e| match e {
                    keyring::Error::NoStorageAccess(_) => {
                        GifboardError::AuthorizationDenied(e.to_string())
                    }
                    other => GifboardError::AgentUnavailable(other.to_string()),
                })?;
                let session = Session::new(Self::identity_of(&secret));
                debug!("provisioned new agent identity: {}", session.identity);
                Ok(session)
            }
            Err(keyring::Error::NoStorageAccess(e)) => {
                Err(GifboardError::AuthorizationDenied(e.to_string()).into())
            }
            Err(e) => Err(GifboardError::AgentUnavailable(e.to_string()).into()),
        }
    }

    /// Deletes the keyring entry. A missing entry is treated as success.
    async fn revoke_session(&self) -> Result<()> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!("keyring unavailable during revoke: {}", e);
                return Ok(());
            }
        };

        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(GifboardError::Keyring(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_deterministic() {
        let a = KeyringAgent::identity_of("secret-material");
        let b = KeyringAgent::identity_of("secret-material");
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_differs_per_secret() {
        let a = KeyringAgent::identity_of("secret-a");
        let b = KeyringAgent::identity_of("secret-b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_is_url_safe_digest_length() {
        let identity = KeyringAgent::identity_of("anything");
        // 32-byte digest, base64url without padding.
        assert_eq!(identity.len(), 43);
        assert!(!identity.contains('='));
        assert!(!identity.contains('+'));
        assert!(!identity.contains('/'));
    }

    #[test]
    fn test_generated_secrets_are_unique() {
        let a = KeyringAgent::generate_secret();
        let b = KeyringAgent::generate_secret();
        assert_ne!(a, b);
    }
}
