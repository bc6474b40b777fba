//! Portal state machine
//!
//! [`Portal`] owns the wallet-connection status and the record view, and
//! sequences every agent and account operation:
//!
//! - process start: a silent probe for prior trust, then a fetch
//! - explicit connect: an interactive authorization request, then a fetch
//! - provisioning and appends: the write, then a fetch
//!
//! The record view is always a pure projection of the last successful
//! fetch (or the uninitialized marker). An append never mutates it in
//! place; the follow-up fetch replaces it wholesale. A fetch that fails
//! for any reason other than "account not found" leaves the previous view
//! untouched and surfaces a transient error instead.
//!
//! Every mutating operation takes `&mut self`, so one portal instance can
//! never run two actions concurrently: the exclusive borrow is the
//! in-flight-action guard, and a rapid double-submit cannot produce
//! overlapping appends.
//!
//! All agent and network calls are bounded by the configured timeout; an
//! elapsed timeout surfaces as [`GifboardError::Transient`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::account::{AccountKey, AccountService, AccountSnapshot, Record};
use crate::agent::{Session, SigningAgent};
use crate::error::{GifboardError, Result};

/// Wallet-connection status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No session; the connect action is available.
    Disconnected,
    /// An explicit authorization request is in flight.
    Connecting,
    /// A live session with the signing agent.
    Connected(Session),
}

/// The record view, orthogonal to the connection status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordView {
    /// No fetch has completed yet.
    Unknown,
    /// The last fetch found no account at the configured key.
    Uninitialized,
    /// The record list as of the last successful fetch, in append order.
    Ready(Vec<Record>),
}

/// The connection state machine.
///
/// Construct one per client with the two adapter capabilities, the fixed
/// board account key, and an operation timeout; then drive it through
/// [`start`](Portal::start), [`connect`](Portal::connect),
/// [`initialize_account`](Portal::initialize_account),
/// [`submit_record`](Portal::submit_record), and
/// [`refresh`](Portal::refresh).
pub struct Portal {
    agent: Arc<dyn SigningAgent>,
    service: Arc<dyn AccountService>,
    key: AccountKey,
    timeout: Duration,
    connection: ConnectionStatus,
    view: RecordView,
}

impl Portal {
    /// Creates a portal in the initial `Disconnected`/`Unknown` state
    ///
    /// # Arguments
    ///
    /// * `agent` - The signing agent capability
    /// * `service` - The board account capability
    /// * `key` - Fixed identifier of the shared board account
    /// * `timeout` - Bound applied to every agent and network call
    pub fn new(
        agent: Arc<dyn SigningAgent>,
        service: Arc<dyn AccountService>,
        key: AccountKey,
        timeout: Duration,
    ) -> Self {
        Self {
            agent,
            service,
            key,
            timeout,
            connection: ConnectionStatus::Disconnected,
            view: RecordView::Unknown,
        }
    }

    /// Current connection status
    pub fn connection(&self) -> &ConnectionStatus {
        &self.connection
    }

    /// Current record view
    pub fn view(&self) -> &RecordView {
        &self.view
    }

    /// The live session, if connected
    pub fn session(&self) -> Option<&Session> {
        match &self.connection {
            ConnectionStatus::Connected(session) => Some(session),
            _ => None,
        }
    }

    /// Projects the current state onto one of the three views
    pub fn screen(&self) -> crate::portal::Screen<'_> {
        crate::portal::Screen::project(&self.connection, &self.view)
    }

    /// Silent reconnection attempt, run once at process start.
    ///
    /// A found trusted session moves the machine to `Connected` and
    /// triggers an immediate fetch. Absence of trust (or of the agent
    /// itself) leaves the machine `Disconnected` without error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the post-probe fetch fails transiently;
    /// the session stays connected with view `Unknown` in that case.
    pub async fn start(&mut self) -> Result<()> {
        let agent = Arc::clone(&self.agent);
        let probed = self
            .bounded("silent session probe", async move {
                agent.probe_trusted_session().await
            })
            .await
            .unwrap_or_else(|e| {
                debug!("silent probe failed: {}", e);
                None
            });

        match probed {
            Some(session) => {
                info!("reconnected trusted session: {}", session.identity);
                self.connection = ConnectionStatus::Connected(session);
                self.refresh().await
            }
            None => {
                debug!("no trusted session found");
                Ok(())
            }
        }
    }

    /// Explicit connect action.
    ///
    /// Valid only from `Disconnected`. On success the machine is
    /// `Connected` and a fetch has been attempted; on authorization
    /// failure it returns to `Disconnected` and the reason is surfaced.
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AlreadyConnected` when a session exists,
    /// `GifboardError::AgentUnavailable` or
    /// `GifboardError::AuthorizationDenied` from the agent, or a transient
    /// error if the post-connect fetch fails.
    pub async fn connect(&mut self) -> Result<()> {
        if !matches!(self.connection, ConnectionStatus::Disconnected) {
            return Err(anyhow!(GifboardError::AlreadyConnected));
        }

        self.connection = ConnectionStatus::Connecting;
        let agent = Arc::clone(&self.agent);
        let requested = self
            .bounded("authorization request", async move {
                agent.request_session().await
            })
            .await;

        match requested {
            Ok(session) => {
                info!("session established: {}", session.identity);
                self.connection = ConnectionStatus::Connected(session);
                self.refresh().await
            }
            Err(e) => {
                warn!("authorization failed: {}", e);
                self.connection = ConnectionStatus::Disconnected;
                Err(e)
            }
        }
    }

    /// Disconnect action.
    ///
    /// Revokes agent trust (best effort) and returns the machine to
    /// `Disconnected`/`Unknown`.
    pub async fn disconnect(&mut self) {
        let agent = Arc::clone(&self.agent);
        if let Err(e) = self
            .bounded("session revocation", async move {
                agent.revoke_session().await
            })
            .await
        {
            warn!("session revocation failed: {}", e);
        }
        self.connection = ConnectionStatus::Disconnected;
        self.view = RecordView::Unknown;
    }

    /// Fetches the account and replaces the record view.
    ///
    /// `Uninitialized` and `Ready` snapshots replace the view; any fetch
    /// failure leaves the view exactly as it was, so a transient outage
    /// can never flip a `Ready` board back to the provisioning prompt.
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::NotConnected` without a session, or
    /// `GifboardError::Transient` when the fetch fails.
    pub async fn refresh(&mut self) -> Result<()> {
        self.ensure_connected()?;

        let service = Arc::clone(&self.service);
        let key = self.key.clone();
        let snapshot = self
            .bounded("account fetch", async move { service.fetch(&key).await })
            .await
            .map_err(|e| anyhow!(GifboardError::Transient(format!("account fetch failed: {}", e))))?;

        self.view = match snapshot {
            AccountSnapshot::Uninitialized => RecordView::Uninitialized,
            AccountSnapshot::Ready(records) => RecordView::Ready(records),
        };
        Ok(())
    }

    /// One-time account provisioning.
    ///
    /// Valid only while the view is `Uninitialized` (a view that is still
    /// `Unknown` is refreshed first). On success the follow-up fetch is
    /// expected to land on an empty `Ready` board. On failure the view
    /// stays `Uninitialized` and nothing is retried automatically.
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AlreadyInitialized` when the account exists
    /// (locally detected or reported by the service),
    /// `GifboardError::InitializationFailed` on provisioning failure, or a
    /// transient error from the surrounding fetches.
    pub async fn initialize_account(&mut self) -> Result<()> {
        self.ensure_connected()?;
        if matches!(self.view, RecordView::Unknown) {
            self.refresh().await?;
        }
        if matches!(self.view, RecordView::Ready(_)) {
            return Err(anyhow!(GifboardError::AlreadyInitialized));
        }

        let owner = self.owner_identity()?;
        let service = Arc::clone(&self.service);
        let key = self.key.clone();
        self.bounded("account initialization", async move {
            service.initialize(&key, &owner).await
        })
        .await?;

        info!("board account initialized: {}", self.key);
        self.refresh().await
    }

    /// Submits one record.
    ///
    /// A link that is empty after trimming is a silent no-op: it returns
    /// `Ok` without touching the network or the view. Otherwise the record
    /// is appended and the view is replaced by a follow-up fetch. On
    /// append failure the previous (possibly stale) list is kept until the
    /// next successful fetch.
    ///
    /// # Errors
    ///
    /// Returns `GifboardError::AccountUninitialized` when the account does
    /// not exist yet, `GifboardError::AppendFailed` when the write is
    /// rejected, or a transient error from the surrounding fetches.
    pub async fn submit_record(&mut self, link: &str) -> Result<()> {
        self.ensure_connected()?;

        let link = link.trim();
        if link.is_empty() {
            debug!("empty link ignored");
            return Ok(());
        }

        if matches!(self.view, RecordView::Unknown) {
            self.refresh().await?;
        }
        if !matches!(self.view, RecordView::Ready(_)) {
            return Err(anyhow!(GifboardError::AccountUninitialized));
        }

        let owner = self.owner_identity()?;
        let record = Record::new(link);
        let service = Arc::clone(&self.service);
        let key = self.key.clone();
        self.bounded("record append", async move {
            service.append(&key, &owner, &record).await
        })
        .await?;

        info!("record appended: {}", link);
        self.refresh().await
    }

    fn ensure_connected(&self) -> Result<()> {
        match self.connection {
            ConnectionStatus::Connected(_) => Ok(()),
            _ => Err(anyhow!(GifboardError::NotConnected)),
        }
    }

    fn owner_identity(&self) -> Result<String> {
        self.session()
            .map(|s| s.identity.clone())
            .ok_or_else(|| anyhow!(GifboardError::NotConnected))
    }

    /// Bounds an operation by the configured timeout.
    async fn bounded<T, F>(&self, what: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!(GifboardError::Transient(format!(
                "{} timed out after {:?}",
                what, self.timeout
            )))),
        }
    }
}
