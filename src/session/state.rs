//! Per-user session state machine.

use crate::core::{Base, State};
use serde::{Deserialize, Serialize};

/// Where a user stands in the calculator's state machine.
///
/// ```text
/// NoBaseSelected --select(b)--> BaseSelected(b) --select(b')--> BaseSelected(b')
/// ```
///
/// Re-selection overwrites the previous base. There is no terminal state,
/// and evaluating an expression never changes the state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "base")]
pub enum SessionState {
    #[default]
    NoBaseSelected,
    BaseSelected(Base),
}

impl SessionState {
    /// Transition on a base selection (pure).
    pub fn select(self, base: Base) -> SessionState {
        SessionState::BaseSelected(base)
    }

    pub fn selected_base(&self) -> Option<Base> {
        match self {
            Self::NoBaseSelected => None,
            Self::BaseSelected(base) => Some(*base),
        }
    }
}

impl From<Option<Base>> for SessionState {
    fn from(base: Option<Base>) -> Self {
        base.map_or(SessionState::NoBaseSelected, SessionState::BaseSelected)
    }
}

impl State for SessionState {
    fn name(&self) -> &str {
        match self {
            Self::NoBaseSelected => "NoBaseSelected",
            Self::BaseSelected(_) => "BaseSelected",
        }
    }
}
