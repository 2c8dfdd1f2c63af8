//! Routes events through the session store and the evaluator.

use crate::core::{evaluate, Base, CalcError, CalculationResult, ParseBaseError, State};
use crate::dispatch::{Event, EventKind, Reply, HELP};
use crate::session::{SessionStore, UserId};
use tracing::{debug, info};

/// Handles one event at a time against a borrowed [`SessionStore`].
///
/// Every failure is turned into a reply here; nothing a user sends can make
/// [`Dispatcher::handle`] fail.
///
/// # Example
///
/// ```rust
/// use basecalc::dispatch::{Dispatcher, Event, Reply};
/// use basecalc::session::SessionStore;
///
/// let store = SessionStore::new();
/// let dispatcher = Dispatcher::new(&store);
///
/// dispatcher.handle(&Event::select_base("alice", "hexadecimal"));
/// let replies = dispatcher.handle(&Event::calculate("alice", "A + B"));
/// assert_eq!(replies.len(), 3);
/// assert_eq!(replies[2].render(), "\u{1f520} Result in hexadecimal: 15");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'s> {
    sessions: &'s SessionStore,
}

impl<'s> Dispatcher<'s> {
    pub fn new(sessions: &'s SessionStore) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &'s SessionStore {
        self.sessions
    }

    pub fn handle(&self, event: &Event) -> Vec<Reply> {
        match &event.kind {
            EventKind::Start => vec![Reply::picker()],
            EventKind::Help => vec![Reply::text(HELP)],
            EventKind::SelectBase(name) => vec![self.select_base(&event.user, name)],
            EventKind::Calculate(text) => match self.calculate(&event.user, text) {
                Ok(result) => Reply::results(&result),
                Err(err) => vec![Reply::error(&err)],
            },
        }
    }

    /// Apply a picker selection.
    ///
    /// Only canonical base names are accepted; anything else leaves the
    /// session untouched.
    pub fn select_base(&self, user: &UserId, name: &str) -> Reply {
        let Some(base) = Base::from_name(name.trim()) else {
            info!(user = %user, name, "Rejected unknown base");
            return Reply::Error {
                kind: "unknown_base".to_string(),
                message: ParseBaseError(name.trim().to_string()).to_string(),
            };
        };

        self.sessions.select_base(user, base);
        Reply::BaseSelected { base }
    }

    /// Evaluate `text` in the user's selected base.
    ///
    /// Fails with [`CalcError::NoBaseSelected`] without parsing when the user
    /// has not picked a base. The session is only read.
    pub fn calculate(&self, user: &UserId, text: &str) -> Result<CalculationResult, CalcError> {
        let state = self.sessions.state(user);
        let Some(base) = state.selected_base() else {
            info!(user = %user, state = state.name(), "Calculation before base selection");
            return Err(CalcError::NoBaseSelected);
        };

        let text = text.trim();
        match evaluate(base, text) {
            Ok(result) => {
                debug!(user = %user, %base, expression = text, result = %result.decimal, "Evaluated");
                Ok(result)
            }
            Err(err) => {
                info!(user = %user, %base, expression = text, kind = err.kind(), "Rejected expression");
                Err(err)
            }
        }
    }
}
