//! Core report composition for HireMe.
//!
//! This crate turns quote records into printable HTML documents. It has
//! ZERO browser, web or database dependencies: composition is a pure
//! function of its inputs and delivery goes through a sink trait.
//!
//! # Modules
//!
//! - `quote` - Quote records, statuses and roles
//! - `report` - Config resolution, stylesheet, sections, assembly, batch
//! - `sink` - Document delivery targets

pub mod quote;
pub mod report;
pub mod sink;

pub use quote::{QuoteRecord, QuoteStatus, Role};
pub use report::{
    ReportConfig, ReportError, ReportOverrides, ReportService, generate_batch_report,
    generate_report,
};
pub use sink::{DocumentSink, FileSink, MemorySink, SinkError, StdoutSink};
