//! Report generation service.
//!
//! Ties the pieces together: resolve overrides, compose the document and
//! hand it to a sink. Nothing is retried; a failure is reported to the
//! caller as-is.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use super::assembler::{assemble_at, report_title};
use super::batch::{assemble_batch_at, batch_title};
use super::config::{ReportConfig, ReportOverrides};
use super::error::ReportError;
use super::sections::RenderContext;
use crate::quote::QuoteRecord;
use crate::sink::DocumentSink;

/// Service for generating and delivering quote reports.
///
/// Holds the base configuration (usually loaded from application settings)
/// and the sink documents are delivered to. Per-call overrides are merged on
/// top of the base.
#[derive(Debug)]
pub struct ReportService<S> {
    base: ReportConfig,
    sink: S,
}

impl<S: DocumentSink> ReportService<S> {
    /// Creates a service with a base configuration.
    pub const fn new(base: ReportConfig, sink: S) -> Self {
        Self { base, sink }
    }

    /// Creates a service using the built-in defaults.
    pub fn with_defaults(sink: S) -> Self {
        Self::new(ReportConfig::default(), sink)
    }

    /// Base configuration.
    pub const fn base(&self) -> &ReportConfig {
        &self.base
    }

    /// The sink documents are delivered to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Generates and delivers a single-record report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RenderFailure` if composition fails and
    /// `ReportError::Sink` if the sink refuses the document.
    pub fn generate_report(
        &self,
        record: &QuoteRecord,
        overrides: &ReportOverrides,
    ) -> Result<(), ReportError> {
        self.generate_report_at(record, overrides, Utc::now())
    }

    /// Same as [`Self::generate_report`] with an explicit generation time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_report`].
    #[instrument(skip_all, fields(quote_id = record.id))]
    pub fn generate_report_at(
        &self,
        record: &QuoteRecord,
        overrides: &ReportOverrides,
        generated_at: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        let config = self.base.merge(overrides);
        let ctx = RenderContext::new(&config, generated_at);

        let markup = assemble_at(record, &ctx)?;
        self.deliver(&markup, &report_title(record))
    }

    /// Generates and delivers one combined report for many records.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RenderFailure` if composition fails and
    /// `ReportError::Sink` if the sink refuses the document.
    pub fn generate_batch_report(
        &self,
        records: &[QuoteRecord],
        overrides: &ReportOverrides,
    ) -> Result<(), ReportError> {
        self.generate_batch_report_at(records, overrides, Utc::now())
    }

    /// Same as [`Self::generate_batch_report`] with an explicit generation
    /// time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_batch_report`].
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn generate_batch_report_at(
        &self,
        records: &[QuoteRecord],
        overrides: &ReportOverrides,
        generated_at: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        let config = self.base.merge(overrides);
        let ctx = RenderContext::new(&config, generated_at);

        let markup = assemble_batch_at(records, &ctx)?;
        self.deliver(&markup, &batch_title(records.len()))
    }

    fn deliver(&self, markup: &str, title: &str) -> Result<(), ReportError> {
        match self.sink.deliver(markup, title) {
            Ok(()) => {
                info!(title, bytes = markup.len(), "Report delivered");
                Ok(())
            }
            Err(err) => {
                error!(title, error = %err, "Report delivery failed");
                Err(err.into())
            }
        }
    }
}

/// Generates a single-record report with the built-in defaults as base.
///
/// # Errors
///
/// See [`ReportService::generate_report`].
pub fn generate_report(
    record: &QuoteRecord,
    overrides: &ReportOverrides,
    sink: &impl DocumentSink,
) -> Result<(), ReportError> {
    ReportService::with_defaults(sink).generate_report(record, overrides)
}

/// Generates a batch report with the built-in defaults as base.
///
/// # Errors
///
/// See [`ReportService::generate_batch_report`].
pub fn generate_batch_report(
    records: &[QuoteRecord],
    overrides: &ReportOverrides,
    sink: &impl DocumentSink,
) -> Result<(), ReportError> {
    ReportService::with_defaults(sink).generate_batch_report(records, overrides)
}
