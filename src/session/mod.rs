//! Per-user session tracking.
//!
//! A session records which base a user selected. The store is constructed
//! once and passed by reference to whatever handles events; there is no
//! process-wide session state.

mod state;
mod store;

pub use state::SessionState;
pub use store::{SessionStore, UserId};
