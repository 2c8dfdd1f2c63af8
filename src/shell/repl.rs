//! Line-oriented REPL transport.

use crate::dispatch::{Dispatcher, Event, Reply};
use crate::session::UserId;
use crate::shell::command::{parse_line, ShellCommand};
use crate::shell::sink::{ReplySink, SinkError};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters reported when the loop ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub events: usize,
    pub errors: usize,
}

/// Hosts a [`Dispatcher`] on a line-based input and a [`ReplySink`].
///
/// Each line is handled to completion before the next one is read.
pub struct Repl<'s, S: ReplySink> {
    dispatcher: Dispatcher<'s>,
    sink: S,
    user: UserId,
    summary: ReplSummary,
}

impl<'s, S: ReplySink> Repl<'s, S> {
    pub fn new(dispatcher: Dispatcher<'s>, sink: S, user: UserId) -> Self {
        Self {
            dispatcher,
            sink,
            user,
            summary: ReplSummary::default(),
        }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn summary(&self) -> ReplSummary {
        self.summary
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handle one input line.
    pub fn execute(&mut self, line: &str) -> Result<Flow, SinkError> {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                self.summary.errors += 1;
                self.sink.send(&Reply::Error {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                })?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::SwitchUser(id) => {
                self.user = UserId::new(id);
                info!(user = %self.user, "Switched user");
                self.sink
                    .send(&Reply::text(format!("Now acting as user {}", self.user)))?;
            }
            ShellCommand::Event(kind) => {
                let event = Event::new(self.user.clone(), kind);
                debug!(user = %event.user, kind = ?event.kind, "Handling event");
                self.summary.events += 1;
                for reply in self.dispatcher.handle(&event) {
                    if reply.is_error() {
                        self.summary.errors += 1;
                    }
                    self.sink.send(&reply)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    /// Read lines until end of input or `/quit`.
    ///
    /// `prompt` is written to `prompt_out` before each line when non-empty.
    pub fn run<R: BufRead, P: Write>(
        &mut self,
        input: R,
        prompt: &str,
        mut prompt_out: P,
    ) -> Result<ReplSummary, ReplError> {
        let mut lines = input.lines();
        loop {
            if !prompt.is_empty() {
                write!(prompt_out, "{prompt}")
                    .and_then(|_| prompt_out.flush())
                    .map_err(|e| ReplError::Sink(SinkError::Io(e)))?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.map_err(ReplError::Input)?;

            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }

        info!(
            events = self.summary.events,
            errors = self.summary.errors,
            "REPL finished"
        );
        Ok(self.summary)
    }
}
