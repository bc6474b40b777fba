//! View projection
//!
//! [`Screen`] derives what the presentation layer should render purely
//! from the current state machine state. Exactly one of the three views
//! is selected for every `(connection, view)` pair; the projection has no
//! side effects and never renders the board from a view that has not
//! completed a fetch.

use crate::account::Record;
use crate::portal::core::{ConnectionStatus, RecordView};

/// One of the three mutually exclusive views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// The connect prompt: no live session, or a session whose first
    /// fetch has not completed yet.
    Connect,
    /// The one-time provisioning prompt: connected, account absent.
    Initialize,
    /// The record list plus submission form: connected, account fetched.
    Board(&'a [Record]),
}

impl<'a> Screen<'a> {
    /// Selects the view for the given state.
    ///
    /// A `Connected` session whose record view is still `Unknown` maps to
    /// [`Screen::Connect`]: the board must never render from a stale,
    /// unfetched view.
    pub fn project(connection: &ConnectionStatus, view: &'a RecordView) -> Self {
        match (connection, view) {
            (ConnectionStatus::Disconnected | ConnectionStatus::Connecting, _) => Screen::Connect,
            (ConnectionStatus::Connected(_), RecordView::Unknown) => Screen::Connect,
            (ConnectionStatus::Connected(_), RecordView::Uninitialized) => Screen::Initialize,
            (ConnectionStatus::Connected(_), RecordView::Ready(records)) => Screen::Board(records),
        }
    }
}
