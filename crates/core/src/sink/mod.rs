//! Document sinks.
//!
//! A sink receives a finished markup document and shows, prints or stores
//! it. Composition never touches the outside world directly; delivery
//! through [`DocumentSink::deliver`] is the only side effect of a report
//! operation.

mod error;
mod file;
mod memory;
mod writer;

pub use error::SinkError;
pub use file::{FileSink, slugify};
pub use memory::{DeliveredDocument, MemorySink};
pub use writer::{StdoutSink, WriterSink};

/// Destination for finished documents.
pub trait DocumentSink {
    /// Hands over a complete document.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the target cannot take the document.
    fn deliver(&self, markup: &str, title: &str) -> Result<(), SinkError>;
}

impl<T: DocumentSink + ?Sized> DocumentSink for &T {
    fn deliver(&self, markup: &str, title: &str) -> Result<(), SinkError> {
        (**self).deliver(markup, title)
    }
}

impl<T: DocumentSink + ?Sized> DocumentSink for Box<T> {
    fn deliver(&self, markup: &str, title: &str) -> Result<(), SinkError> {
        (**self).deliver(markup, title)
    }
}
