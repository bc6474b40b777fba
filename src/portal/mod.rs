//! Wallet-connection and board synchronization core
//!
//! This module owns the client's connection state machine and the pure
//! view projection derived from it:
//!
//! - [`core::Portal`] -- drives session establishment, one-time account
//!   provisioning, record submission, and the re-fetch that follows every
//!   mutation.
//! - [`view::Screen`] -- selects exactly one of three mutually exclusive
//!   views from the current state.

pub mod core;
pub mod view;

pub use self::core::{ConnectionStatus, Portal, RecordView};
pub use self::view::Screen;
