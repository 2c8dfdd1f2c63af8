//! Reply sinks: where a transport delivers replies.

use crate::dispatch::Reply;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write reply: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outbound side of a transport.
pub trait ReplySink {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError>;
}

/// Writes each reply's text rendering, one message per line group.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReplySink for TextSink<W> {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", reply.render())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes each reply as one JSON object per line.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReplySink for JsonSink<W> {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, reply)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<S: ReplySink + ?Sized> ReplySink for Box<S> {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError> {
        (**self).send(reply)
    }
}
