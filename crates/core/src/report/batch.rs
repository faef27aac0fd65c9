//! Batch reports: one combined document with a summary block and one page
//! per record.

use chrono::{DateTime, Utc};
use hireme_shared::Money;
use serde::Serialize;
use tracing::{debug, info};

use super::assembler::{record_body, report_root};
use super::config::{ReportConfig, SectionName};
use super::error::ReportError;
use super::markup::{Document, Element, Node, el};
use super::sections::{self, RenderContext};
use super::stylesheet::build_stylesheet;
use crate::quote::{QuoteRecord, QuoteStatus, Role};

/// Per-status record counts. Every known status is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StatusCounts {
    pub pending: usize,
    pub quoted: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub withdrawn: usize,
    pub expired: usize,
    /// Records with a status outside the known set.
    pub other: usize,
}

impl StatusCounts {
    fn record(&mut self, status: &QuoteStatus) {
        let slot = match status {
            QuoteStatus::Pending => &mut self.pending,
            QuoteStatus::Quoted => &mut self.quoted,
            QuoteStatus::Accepted => &mut self.accepted,
            QuoteStatus::Rejected => &mut self.rejected,
            QuoteStatus::Withdrawn => &mut self.withdrawn,
            QuoteStatus::Expired => &mut self.expired,
            QuoteStatus::Other(_) => &mut self.other,
        };
        *slot += 1;
    }

    /// Count for one status; unknown statuses share the `other` bucket.
    #[must_use]
    pub const fn get(&self, status: &QuoteStatus) -> usize {
        match status {
            QuoteStatus::Pending => self.pending,
            QuoteStatus::Quoted => self.quoted,
            QuoteStatus::Accepted => self.accepted,
            QuoteStatus::Rejected => self.rejected,
            QuoteStatus::Withdrawn => self.withdrawn,
            QuoteStatus::Expired => self.expired,
            QuoteStatus::Other(_) => self.other,
        }
    }
}

/// Aggregate figures for a batch, computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    /// Number of records.
    pub total: usize,
    /// Records per status.
    pub counts: StatusCounts,
    /// Price plus travel fee over accepted records.
    pub realized_revenue: Money,
    /// Price plus travel fee over quoted and accepted records.
    pub potential_revenue: Money,
    /// When the batch was generated.
    pub generated_at: DateTime<Utc>,
}

impl SummaryStatistics {
    /// Computes the summary in a single pass over the records.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RenderFailure` naming the record whose amount
    /// pushed a revenue total past what a `Decimal` can hold.
    pub fn compute(
        records: &[QuoteRecord],
        generated_at: DateTime<Utc>,
    ) -> Result<Self, ReportError> {
        let mut counts = StatusCounts::default();
        let mut realized_revenue = Money::zero();
        let mut potential_revenue = Money::zero();

        for record in records {
            counts.record(&record.status);
            let realized = match record.status {
                QuoteStatus::Accepted => true,
                QuoteStatus::Quoted => false,
                _ => continue,
            };

            let overflow =
                || ReportError::render_failure(Some(record.id), "revenue total overflowed");
            let amount = record.total_amount().ok_or_else(overflow)?;
            potential_revenue = potential_revenue.checked_add(amount).ok_or_else(overflow)?;
            if realized {
                realized_revenue = realized_revenue.checked_add(amount).ok_or_else(overflow)?;
            }
        }

        Ok(Self {
            total: records.len(),
            counts,
            realized_revenue,
            potential_revenue,
            generated_at,
        })
    }
}

/// Document title of a batch report.
#[must_use]
pub fn batch_title(count: usize) -> String {
    format!("Quotes Report ({count} quotes)")
}

fn summary_card(label: &str, count: usize) -> Element {
    el("div")
        .class("summary-card")
        .child(el("span").class("summary-count").text(count.to_string()))
        .child(el("span").class("summary-label").text(label))
}

fn revenue_line(label: &str, amount: Money, ctx: &RenderContext<'_>) -> Element {
    el("div")
        .class("summary-revenue-item")
        .child(el("div").class("summary-label").text(label))
        .child(
            el("div")
                .class("revenue-figure")
                .text(amount.format_with(&ctx.config.style.currency_symbol)),
        )
}

/// Summary block: title, generation time, per-status counts and revenue.
#[must_use]
pub fn summary_block(stats: &SummaryStatistics, ctx: &RenderContext<'_>) -> Node {
    let mut cards = vec![summary_card("Total Quotes", stats.total)];
    cards.extend(
        QuoteStatus::ALL
            .iter()
            .map(|status| summary_card(status.label(), stats.counts.get(status))),
    );
    if stats.counts.other > 0 {
        cards.push(summary_card(QuoteStatus::Other(String::new()).label(), stats.counts.other));
    }

    el("section")
        .class("batch-summary")
        .child(
            el("h1")
                .class("company-name")
                .text(format!("{} Quotes Report", ctx.config.style.company_name)),
        )
        .child(el("p").class("generated-at").text(format!(
            "Generated {} | Prepared for: {}",
            ctx.generated_label(),
            ctx.role.display_name()
        )))
        .child(el("div").class("summary-grid").children(cards))
        .child(
            el("div")
                .class("summary-revenue")
                .child(revenue_line("Realized Revenue", stats.realized_revenue, ctx))
                .child(revenue_line("Potential Revenue", stats.potential_revenue, ctx)),
        )
        .into()
}

/// Body nodes of a batch: summary, one article per record each followed by
/// a page break, and the shared print controls.
///
/// # Errors
///
/// Fails when the revenue totals overflow, see [`SummaryStatistics::compute`].
pub fn batch_body(
    records: &[QuoteRecord],
    ctx: &RenderContext<'_>,
) -> Result<Vec<Node>, ReportError> {
    let stats = SummaryStatistics::compute(records, ctx.generated_at)?;
    debug!(
        total = stats.total,
        accepted = stats.counts.accepted,
        "Computed batch summary"
    );

    let mut body = Vec::with_capacity(records.len() * 2 + 2);
    body.push(summary_block(&stats, ctx));

    let last = records.len().saturating_sub(1);
    for (index, record) in records.iter().enumerate() {
        body.push(
            el("article")
                .class("batch-record")
                .attr("data-quote-id", record.id.to_string())
                .children(record_body(record, ctx))
                .into(),
        );

        let page_break = el("div").class("page-break");
        body.push(if index == last {
            page_break.class("page-break-last").into()
        } else {
            page_break.into()
        });
    }

    if ctx.config.sections.is_enabled(SectionName::PrintButtons) {
        body.push(sections::print_controls());
    }
    Ok(body)
}

/// Assembles a batch document using the current time.
///
/// # Errors
///
/// See [`assemble_batch_at`].
pub fn assemble_batch(
    records: &[QuoteRecord],
    role: Role,
    config: &ReportConfig,
) -> Result<String, ReportError> {
    let ctx = RenderContext::new(config, Utc::now()).with_role(role);
    assemble_batch_at(records, &ctx)
}

/// Assembles a batch document.
///
/// # Errors
///
/// Returns `ReportError::RenderFailure` if the revenue totals overflow or the
/// document cannot be serialized. The failure names the offending record
/// when there is one.
pub fn assemble_batch_at(
    records: &[QuoteRecord],
    ctx: &RenderContext<'_>,
) -> Result<String, ReportError> {
    info!(records = records.len(), role = %ctx.role, "Assembling batch report");

    let body = batch_body(records, ctx)?;
    let stylesheet = build_stylesheet(ctx.config)
        .map_err(|error| ReportError::render_failure(None, error.to_string()))?;

    Document::new(batch_title(records.len()), stylesheet)
        .child(report_root(body))
        .render()
        .map_err(|error| ReportError::render_failure(None, error.to_string()))
}
