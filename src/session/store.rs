//! Concurrency-safe map from user to selected base.

use crate::core::Base;
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Opaque identifier of the user an event came from.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Holds each user's single active base selection.
///
/// An entry is created on a user's first selection and overwritten on every
/// later one. Entries live as long as the store. The whole map sits behind
/// one read/write lock; each operation touches exactly one user's entry, so
/// users never observe each other's selections.
///
/// # Example
///
/// ```rust
/// use basecalc::core::Base;
/// use basecalc::session::{SessionStore, UserId};
///
/// let store = SessionStore::new();
/// let alice = UserId::from("alice");
///
/// assert_eq!(store.selected_base(&alice), None);
/// store.select_base(&alice, Base::Binary);
/// store.select_base(&alice, Base::Hexadecimal);
/// assert_eq!(store.selected_base(&alice), Some(Base::Hexadecimal));
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, Base>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `user`'s base, overwriting any prior selection.
    ///
    /// Returns the state the user was in before the selection.
    pub fn select_base(&self, user: &UserId, base: Base) -> SessionState {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let previous = SessionState::from(sessions.insert(user.clone(), base));
        debug!(
            user = %user,
            from = ?previous,
            to = ?previous.select(base),
            "Base selected"
        );
        previous
    }

    /// Look up `user`'s base; `None` if they never selected one.
    pub fn selected_base(&self, user: &UserId) -> Option<Base> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user)
            .copied()
    }

    pub fn state(&self, user: &UserId) -> SessionState {
        SessionState::from(self.selected_base(user))
    }

    /// Number of users that have selected a base.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn unknown_user_has_no_base() {
        let store = SessionStore::new();
        let user = UserId::from("nobody");
        assert_eq!(store.selected_base(&user), None);
        assert_eq!(store.state(&user), SessionState::NoBaseSelected);
        assert!(store.is_empty());
    }

    #[test]
    fn select_returns_previous_state() {
        let store = SessionStore::new();
        let user = UserId::from(42_i64);

        assert_eq!(store.select_base(&user, Base::Decimal), SessionState::NoBaseSelected);
        assert_eq!(
            store.select_base(&user, Base::Hexadecimal),
            SessionState::BaseSelected(Base::Decimal)
        );
        assert_eq!(store.state(&user), SessionState::BaseSelected(Base::Hexadecimal));
    }

    #[test]
    fn reselection_keeps_one_entry_per_user() {
        let store = SessionStore::new();
        let user = UserId::from("alice");
        store.select_base(&user, Base::Decimal);
        store.select_base(&user, Base::Binary);
        store.select_base(&user, Base::Hexadecimal);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_base(&user), Some(Base::Hexadecimal));
    }

    #[test]
    fn users_are_isolated() {
        let store = SessionStore::new();
        let a = UserId::from("a");
        let b = UserId::from("b");

        store.select_base(&a, Base::Binary);
        store.select_base(&b, Base::Hexadecimal);

        assert_eq!(store.selected_base(&a), Some(Base::Binary));
        assert_eq!(store.selected_base(&b), Some(Base::Hexadecimal));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_selections_do_not_interfere() {
        let store = Arc::new(SessionStore::new());
        let handles: Vec<_> = (0..8_i64)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let user = UserId::from(i);
                    let base = Base::ALL[(i % 3) as usize];
                    for _ in 0..100 {
                        store.select_base(&user, base);
                        assert_eq!(store.selected_base(&user), Some(base));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 8);
        for i in 0..8_i64 {
            assert_eq!(
                store.selected_base(&UserId::from(i)),
                Some(Base::ALL[(i % 3) as usize])
            );
        }
    }
}
