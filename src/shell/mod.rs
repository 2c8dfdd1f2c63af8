//! Command-line transport for the calculator.
//!
//! This is the "imperative shell": it reads lines, turns them into events,
//! and writes replies. Everything it calls into is pure apart from the
//! session store.

mod command;
mod repl;
mod sink;

pub use command::{parse_line, CommandError, ShellCommand};
pub use repl::{Flow, Repl, ReplError, ReplSummary};
pub use sink::{JsonSink, ReplySink, SinkError, TextSink};
