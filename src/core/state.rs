//! Core State trait for state machine states.
//!
//! Session states implement this trait, which provides pure methods for
//! inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States are copied out of the session store on lookup
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are reported in JSON replies
///
/// # Example
///
/// ```rust
/// use basecalc::core::{Base, State};
/// use basecalc::session::SessionState;
///
/// let state = SessionState::NoBaseSelected;
/// assert_eq!(state.name(), "NoBaseSelected");
///
/// let state = state.select(Base::Hexadecimal);
/// assert_eq!(state.name(), "BaseSelected");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
