//! Quote report composition.
//!
//! Turns quote records into self-contained printable HTML documents:
//! - Config resolution (defaults plus caller overrides)
//! - Stylesheet generation
//! - Per-section markup generation
//! - Single-record and batch document assembly
//! - Delivery through a [`DocumentSink`](crate::sink::DocumentSink)

pub mod assembler;
pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod markup;
pub mod sections;
pub mod service;
pub mod stylesheet;


pub use assembler::{assemble, assemble_at, report_title};
pub use batch::{SummaryStatistics, StatusCounts, assemble_batch, assemble_batch_at, batch_title};
pub use config::{
    CssValue, ReportConfig, ReportOverrides, SectionName, SectionToggles, StyleConfig, resolve,
};
pub use error::{ConfigError, ReportError, SectionError};
pub use sections::RenderContext;
pub use service::{ReportService, generate_batch_report, generate_report};
pub use stylesheet::build_stylesheet;
