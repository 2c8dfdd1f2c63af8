//! Inbound events from a transport.

use crate::session::UserId;

/// What a user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Open the base picker.
    Start,
    /// Show usage.
    Help,
    /// A base was picked; carries the picker's raw value.
    SelectBase(String),
    /// Evaluate the text that followed the calculate command.
    Calculate(String),
}

/// An inbound event attributed to a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub user: UserId,
    pub kind: EventKind,
}

impl Event {
    pub fn new(user: impl Into<UserId>, kind: EventKind) -> Self {
        Self {
            user: user.into(),
            kind,
        }
    }

    pub fn start(user: impl Into<UserId>) -> Self {
        Self::new(user, EventKind::Start)
    }

    pub fn help(user: impl Into<UserId>) -> Self {
        Self::new(user, EventKind::Help)
    }

    pub fn select_base(user: impl Into<UserId>, base: impl Into<String>) -> Self {
        Self::new(user, EventKind::SelectBase(base.into()))
    }

    pub fn calculate(user: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self::new(user, EventKind::Calculate(text.into()))
    }
}
