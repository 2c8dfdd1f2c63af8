//! Event handling between a transport and the calculator core.
//!
//! A transport turns whatever it receives into [`Event`]s, hands them to a
//! [`Dispatcher`], and delivers the returned [`Reply`]s. The dispatcher is
//! transport-agnostic: the bundled REPL in [`crate::shell`] is one binding.

mod event;
mod handler;
mod reply;

pub use event::{Event, EventKind};
pub use handler::Dispatcher;
pub use reply::{Reply, HELP, WELCOME};
