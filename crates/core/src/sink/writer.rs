//! Sink that streams documents to any writer.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use super::{DocumentSink, SinkError};

/// Writes each document followed by a newline.
#[derive(Debug)]
pub struct WriterSink<W> {
    label: String,
    writer: Mutex<W>,
}

/// Writer sink on standard output.
pub type StdoutSink = WriterSink<Stdout>;

impl<W: Write> WriterSink<W> {
    /// Wraps a writer. The label names the target in errors.
    pub fn new(label: impl Into<String>, writer: W) -> Self {
        Self {
            label: label.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Unavailable` if a writer panicked while holding
    /// the lock.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|_| SinkError::unavailable(format!("{} is poisoned", self.label)))
    }
}

impl WriterSink<Stdout> {
    /// Sink on the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }
}

impl<W: Write> DocumentSink for WriterSink<W> {
    fn deliver(&self, markup: &str, _title: &str) -> Result<(), SinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SinkError::unavailable(format!("{} is poisoned", self.label)))?;

        writer
            .write_all(markup.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|err| match err.kind() {
                io::ErrorKind::BrokenPipe => {
                    SinkError::unavailable(format!("{} was closed", self.label))
                }
                _ => SinkError::io(&self.label, err),
            })
    }
}
