//! Shared test doubles for integration tests
//!
//! [`FakeAgent`] and [`InMemoryBoard`] implement the two adapter traits
//! in-process, with call counters and one-shot failure injection, so the
//! portal can be driven through whole scenarios without any network or
//! keyring access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use gifboard::account::{AccountKey, AccountService, AccountSnapshot, Record};
use gifboard::agent::{Session, SigningAgent};
use gifboard::error::{GifboardError, Result};

/// Deterministic signing agent double.
pub struct FakeAgent {
    /// Identity returned by a silent probe, when trust exists.
    trusted: Mutex<Option<String>>,
    /// Identity granted by an explicit request, unless denying/absent.
    identity: String,
    /// Explicit requests fail with `AuthorizationDenied`.
    deny: bool,
    /// Explicit requests fail with `AgentUnavailable`.
    absent: bool,
    probe_calls: AtomicUsize,
    request_calls: AtomicUsize,
}

impl FakeAgent {
    /// Agent with pre-existing trust: the silent probe succeeds.
    pub fn trusted(identity: &str) -> Self {
        Self {
            trusted: Mutex::new(Some(identity.to_string())),
            identity: identity.to_string(),
            deny: false,
            absent: false,
            probe_calls: AtomicUsize::new(0),
            request_calls: AtomicUsize::new(0),
        }
    }

    /// Agent without prior trust: the probe returns `None`, an explicit
    /// request succeeds and establishes trust.
    pub fn untrusted(identity: &str) -> Self {
        Self {
            trusted: Mutex::new(None),
            identity: identity.to_string(),
            deny: false,
            absent: false,
            probe_calls: AtomicUsize::new(0),
            request_calls: AtomicUsize::new(0),
        }
    }

    /// Agent that refuses every explicit authorization.
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Self::untrusted("denied")
        }
    }

    /// No agent installed at all.
    pub fn missing() -> Self {
        Self {
            absent: true,
            ..Self::untrusted("absent")
        }
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SigningAgent for FakeAgent {
    async fn probe_trusted_session(&self) -> Result<Option<Session>> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .trusted
            .lock()
            .unwrap()
            .as_ref()
            .map(|identity| Session::new(identity.clone())))
    }

    async fn request_session(&self) -> Result<Session> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        if self.absent {
            return Err(anyhow!(GifboardError::AgentUnavailable(
                "no agent installed".to_string()
            )));
        }
        if self.deny {
            return Err(anyhow!(GifboardError::AuthorizationDenied(
                "user declined".to_string()
            )));
        }
        *self.trusted.lock().unwrap() = Some(self.identity.clone());
        Ok(Session::new(self.identity.clone()))
    }

    async fn revoke_session(&self) -> Result<()> {
        *self.trusted.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default)]
struct BoardState {
    initialized: bool,
    records: Vec<Record>,
    fail_next_fetch: Option<String>,
    fail_next_append: Option<String>,
    fail_next_initialize: Option<String>,
    fetch_calls: usize,
    append_calls: usize,
    initialize_calls: usize,
}

/// In-memory board account double.
///
/// Starts uninitialized; `initialize` flips it once, `append` pushes in
/// order, `fetch` snapshots. `fail_next_*` injects exactly one failure
/// into the next matching call.
#[derive(Default)]
pub struct InMemoryBoard {
    state: Mutex<BoardState>,
}

impl InMemoryBoard {
    /// An uninitialized board.
    pub fn new() -> Self {
        Self::default()
    }

    /// An initialized board pre-seeded with the given links.
    pub fn seeded(links: &[&str]) -> Self {
        let board = Self::new();
        {
            let mut state = board.state.lock().unwrap();
            state.initialized = true;
            state.records = links.iter().map(|link| Record::new(*link)).collect();
        }
        board
    }

    pub fn fail_next_fetch(&self, reason: &str) {
        self.state.lock().unwrap().fail_next_fetch = Some(reason.to_string());
    }

    pub fn fail_next_append(&self, reason: &str) {
        self.state.lock().unwrap().fail_next_append = Some(reason.to_string());
    }

    pub fn fail_next_initialize(&self, reason: &str) {
        self.state.lock().unwrap().fail_next_initialize = Some(reason.to_string());
    }

    /// The board's true contents, for drift assertions.
    pub fn records(&self) -> Vec<Record> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.lock().unwrap().fetch_calls
    }

    pub fn append_calls(&self) -> usize {
        self.state.lock().unwrap().append_calls
    }

    pub fn initialize_calls(&self) -> usize {
        self.state.lock().unwrap().initialize_calls
    }
}

#[async_trait]
impl AccountService for InMemoryBoard {
    async fn fetch(&self, _key: &AccountKey) -> Result<AccountSnapshot> {
        let mut state = self.state.lock().unwrap();
        state.fetch_calls += 1;
        if let Some(reason) = state.fail_next_fetch.take() {
            return Err(anyhow!(GifboardError::Transient(reason)));
        }
        if !state.initialized {
            return Ok(AccountSnapshot::Uninitialized);
        }
        Ok(AccountSnapshot::Ready(state.records.clone()))
    }

    async fn initialize(&self, _key: &AccountKey, _owner: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.initialize_calls += 1;
        if let Some(reason) = state.fail_next_initialize.take() {
            return Err(anyhow!(GifboardError::InitializationFailed(reason)));
        }
        if state.initialized {
            return Err(anyhow!(GifboardError::AlreadyInitialized));
        }
        state.initialized = true;
        Ok(())
    }

    async fn append(&self, _key: &AccountKey, _owner: &str, record: &Record) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.append_calls += 1;
        if let Some(reason) = state.fail_next_append.take() {
            return Err(anyhow!(GifboardError::AppendFailed(reason)));
        }
        if record.link.trim().is_empty() {
            return Err(anyhow!(GifboardError::AppendFailed(
                "empty record link".to_string()
            )));
        }
        if !state.initialized {
            return Err(anyhow!(GifboardError::AppendFailed(
                "account not found".to_string()
            )));
        }
        state.records.push(record.clone());
        Ok(())
    }
}
