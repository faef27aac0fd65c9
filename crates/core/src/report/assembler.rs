//! Document assembly for a single record.

use std::fmt;

use chrono::Utc;
use tracing::{debug, warn};

use super::config::{ReportConfig, SectionName};
use super::error::{ReportError, SectionError};
use super::markup::{Document, Element, Node, el};
use super::sections::{self, RenderContext};
use super::stylesheet::build_stylesheet;
use crate::quote::{QuoteRecord, Role};

type Generator = fn(&QuoteRecord, &RenderContext<'_>) -> Result<Node, SectionError>;

/// Sections laid out in the two-column grid, in canonical order.
const GRID_SECTIONS: [(SectionName, Generator); 4] = [
    (SectionName::QuoteInfo, sections::quote_info),
    (SectionName::ServiceDetails, sections::service_details),
    (SectionName::ClientDetails, sections::client_details),
    (SectionName::QuoteResponse, sections::quote_response),
];

/// Document title of a single-record report.
#[must_use]
pub fn report_title(record: &QuoteRecord) -> String {
    format!("Quote {}", record.display_number())
}

fn render_section(
    name: SectionName,
    generator: Generator,
    record: &QuoteRecord,
    ctx: &RenderContext<'_>,
) -> Option<Node> {
    if !ctx.config.sections.is_enabled(name) {
        return None;
    }

    match generator(record, ctx) {
        Ok(node) => Some(node),
        Err(error) => {
            warn!(
                quote_id = record.id,
                section = name.key(),
                error = %error,
                "Section failed to render, using placeholder"
            );
            Some(sections::unavailable(name.title()))
        }
    }
}

/// Body nodes for one record in canonical order, without print controls.
///
/// Disabled sections produce nothing and the content grid is left out when
/// none of its sections are enabled.
#[must_use]
pub fn record_body(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Vec<Node> {
    let mut body = Vec::with_capacity(3);

    body.extend(render_section(
        SectionName::Header,
        sections::header,
        record,
        ctx,
    ));

    let grid: Vec<Node> = GRID_SECTIONS
        .iter()
        .filter_map(|(name, generator)| render_section(*name, *generator, record, ctx))
        .collect();
    if !grid.is_empty() {
        body.push(el("div").class("content-grid").children(grid).into());
    }

    body.extend(render_section(
        SectionName::Timeline,
        sections::timeline,
        record,
        ctx,
    ));

    body
}

/// Single-record body including print controls when enabled.
#[must_use]
pub fn report_sections(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Vec<Node> {
    let mut body = record_body(record, ctx);
    if ctx.config.sections.is_enabled(SectionName::PrintButtons) {
        body.push(sections::print_controls());
    }
    body
}

pub(crate) fn report_root(children: Vec<Node>) -> Element {
    el("div").class("report-root").children(children)
}

/// Assembles a complete document for one record using the current time.
///
/// # Errors
///
/// Returns `ReportError::RenderFailure` if the document cannot be serialized.
pub fn assemble(
    record: &QuoteRecord,
    role: Role,
    config: &ReportConfig,
) -> Result<String, ReportError> {
    let ctx = RenderContext::new(config, Utc::now()).with_role(role);
    assemble_at(record, &ctx)
}

/// Assembles a complete document for one record.
///
/// Section failures, including amount overflow, only degrade that section.
///
/// # Errors
///
/// Returns `ReportError::RenderFailure` if the document cannot be serialized.
pub fn assemble_at(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Result<String, ReportError> {
    debug!(quote_id = record.id, role = %ctx.role, "Assembling quote report");

    let failure =
        |error: fmt::Error| ReportError::render_failure(Some(record.id), error.to_string());
    let stylesheet = build_stylesheet(ctx.config).map_err(failure)?;

    Document::new(report_title(record), stylesheet)
        .child(report_root(report_sections(record, ctx)))
        .render()
        .map_err(failure)
}
