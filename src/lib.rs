//! Basecalc: a base-aware conversational calculator
//!
//! A user picks a numeral base (decimal, binario or hexadecimal) and then
//! sends expressions of the form `<operand> <operator> <operand>`. Operands
//! are validated against the selected base and the result is reported in all
//! three bases at once.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: bases, operand validation, operators and evaluation (pure)
//! - [`session`]: the per-user state machine and its concurrency-safe store
//! - [`dispatch`]: turns transport events into replies
//! - [`shell`]: a stdin/stdout REPL binding
//!
//! # Example
//!
//! ```rust
//! use basecalc::core::{evaluate, Base};
//!
//! let result = evaluate(Base::Decimal, "10 + 5").unwrap();
//! assert_eq!(result.decimal, "15");
//! assert_eq!(result.binary, "1111");
//! assert_eq!(result.hexadecimal, "F");
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod logging;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{evaluate, Base, CalcError, CalculationResult, NumericValue, Operator, State};
pub use crate::dispatch::{Dispatcher, Event, EventKind, Reply};
pub use crate::session::{SessionState, SessionStore, UserId};
