//! In-memory sink for hosts that display documents themselves.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{DocumentSink, SinkError};

/// A document handed to a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredDocument {
    /// Document title.
    pub title: String,
    /// Complete markup.
    pub markup: String,
}

/// Keeps every delivered document. Can be created closed to stand in for a
/// surface that refuses documents.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<Vec<DeliveredDocument>>,
    closed: Option<String>,
}

impl MemorySink {
    /// Creates an open, empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects every document with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            documents: Mutex::default(),
            closed: Some(reason.into()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DeliveredDocument>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Documents delivered so far, oldest first.
    #[must_use]
    pub fn documents(&self) -> Vec<DeliveredDocument> {
        self.lock().clone()
    }

    /// Most recently delivered document.
    #[must_use]
    pub fn last(&self) -> Option<DeliveredDocument> {
        self.lock().last().cloned()
    }

    /// Number of delivered documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn deliver(&self, markup: &str, title: &str) -> Result<(), SinkError> {
        if let Some(reason) = &self.closed {
            return Err(SinkError::unavailable(reason.clone()));
        }
        self.lock().push(DeliveredDocument {
            title: title.to_string(),
            markup: markup.to_string(),
        });
        Ok(())
    }
}
