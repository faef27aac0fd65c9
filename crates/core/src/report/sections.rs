//! Section generators.
//!
//! Each generator is a pure function of a record and a [`RenderContext`]
//! that returns one markup fragment. Generators do not call each other, so
//! each one can be tested without assembling a document. Absent fields
//! render as explicit placeholders; only malformed data produces a
//! [`SectionError`].

use chrono::{DateTime, Utc};
use hireme_shared::Money;

use super::config::{CssValue, ReportConfig};
use super::error::SectionError;
use super::format;
use super::markup::{Element, Node, el};
use crate::quote::{QuoteRecord, QuoteStatus, Role, non_blank};

/// Fallback for absent values.
pub const NOT_AVAILABLE: &str = "N/A";
/// Fallback for an absent price.
pub const NOT_QUOTED: &str = "Not quoted";
/// Fallback for absent schedule values.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Fallback for an absent request description.
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Placeholder shown instead of the response block while pending.
pub const RESPONSE_PENDING: &str = "Awaiting provider response";
/// Fixed caption of the withdrawn timeline entry.
pub const WITHDRAWN_CAPTION: &str = "This quote is no longer available.";
/// Text of a section that failed to render.
pub const SECTION_UNAVAILABLE: &str = "This section is unavailable.";

/// Everything a section needs besides the record.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Perspective the report is written from.
    pub role: Role,
    /// Resolved configuration.
    pub config: &'a ReportConfig,
    /// Generation timestamp shown in headers.
    pub generated_at: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    /// Creates a context using the configured role.
    #[must_use]
    pub const fn new(config: &'a ReportConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            role: config.role,
            config,
            generated_at,
        }
    }

    /// Returns a copy with a different role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with(&self.config.style.currency_symbol)
    }

    fn timestamp(&self, field: &'static str, raw: &str) -> Result<String, SectionError> {
        format::timestamp_field(field, raw, self.config.style.timezone)
    }

    /// Generation timestamp in the display timezone.
    #[must_use]
    pub fn generated_label(&self) -> String {
        format::format_datetime(self.generated_at, self.config.style.timezone)
    }
}

/// Status badge for any status, known or not.
#[must_use]
pub fn status_badge(status: &QuoteStatus) -> Element {
    el("span")
        .class("badge")
        .class(status.css_class())
        .attr("data-status", status.as_str())
        .text(status.label())
}

fn section(name: &str, title: &str) -> Element {
    el("section")
        .class("report-section")
        .class(&format!("section-{name}"))
        .child(el("h2").class("section-title").text(title))
}

fn info_row(label: &str, value: impl Into<Node>) -> [Node; 2] {
    [
        el("div").class("info-label").text(label).into(),
        el("div").class("info-value").child(value).into(),
    ]
}

fn text_block(class: &str, heading: &str, body: &str) -> Element {
    el("div")
        .class("text-block")
        .class(class)
        .child(el("h3").text(heading))
        .child(el("p").text(body))
}

/// Title block: company, quote number, status badge, generation time and
/// the role the report is prepared for.
pub fn header(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Result<Node, SectionError> {
    let style = &ctx.config.style;

    Ok(el("header")
        .class("report-header")
        .child(
            el("div")
                .class("header-brand")
                .child(el("h1").class("company-name").text(style.company_name.as_str()))
                .child(el("p").class("report-subtitle").text("Service Quote Report")),
        )
        .child(
            el("div")
                .class("header-meta")
                .child(
                    el("div")
                        .class("quote-number")
                        .text(format!("Quote #{}", record.display_number())),
                )
                .child(status_badge(&record.status))
                .child(el("p").class("generated-at").text(format!(
                    "Generated {} | Prepared for: {}",
                    ctx.generated_label(),
                    ctx.role.display_name()
                ))),
        )
        .into())
}

/// Record information: creation, response and expiry times plus urgency.
pub fn quote_info(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Result<Node, SectionError> {
    let created = match non_blank(record.created_at.as_deref()) {
        Some(raw) => ctx.timestamp("createdAt", raw)?,
        None => NOT_AVAILABLE.to_string(),
    };

    let mut grid = el("div")
        .class("info-grid")
        .children(info_row("Quote Number", record.display_number()))
        .children(info_row("Created", created));

    if let Some(raw) = non_blank(record.responded_at.as_deref()) {
        grid = grid.children(info_row("Responded", ctx.timestamp("respondedAt", raw)?));
    }
    if record.status == QuoteStatus::Quoted {
        if let Some(raw) = non_blank(record.expires_at.as_deref()) {
            grid = grid.children(info_row("Expires", ctx.timestamp("expiresAt", raw)?));
        }
    }
    if let Some(urgency) = record.flagged_urgency() {
        grid = grid.children(info_row(
            "Urgency",
            el("span")
                .class("badge")
                .class("badge-urgency")
                .text(format::humanize(urgency)),
        ));
    }

    Ok(section("quote-info", "Quote Information").child(grid).into())
}

/// Service details: title, category, schedule, location and the request
/// description.
pub fn service_details(
    record: &QuoteRecord,
    ctx: &RenderContext<'_>,
) -> Result<Node, SectionError> {
    let tz = ctx.config.style.timezone;

    let category: Node = match record
        .service_category
        .as_ref()
        .and_then(|category| non_blank(category.name.as_deref()).map(|name| (category, name)))
    {
        Some((category, name)) => {
            let mut value = el("span").class("category");
            if let Some(color) = category
                .color
                .as_deref()
                .and_then(|raw| CssValue::parse("serviceCategory.color", raw).ok())
            {
                value = value.attr("style", format!("color: {color}"));
            }
            if let Some(icon) = non_blank(category.icon.as_deref()) {
                value = value.child(el("span").class("category-icon").text(icon));
            }
            value.text(name).into()
        }
        None => NOT_AVAILABLE.into(),
    };

    let requested_date = match non_blank(record.requested_date.as_deref()) {
        Some(raw) => format::date_field("requestedDate", raw, tz)?,
        None => NOT_SPECIFIED.to_string(),
    };
    let requested_time = match non_blank(record.requested_time.as_deref()) {
        Some(raw) => format::time_field("requestedTime", raw)?,
        None => NOT_SPECIFIED.to_string(),
    };
    let location = record
        .location
        .as_ref()
        .and_then(crate::quote::Location::summary)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let grid = el("div")
        .class("info-grid")
        .children(info_row("Service", record.service_title().unwrap_or(NOT_AVAILABLE)))
        .children(info_row("Category", category))
        .children(info_row("Requested Date", requested_date))
        .children(info_row("Requested Time", requested_time))
        .children(info_row("Location", location));

    let requirements = non_blank(record.client_requirements.as_deref())
        .map(|text| text_block("requirements", "Client Requirements", text));
    let description = text_block(
        "description",
        "Request Description",
        record.request_description().unwrap_or(NO_DESCRIPTION),
    );

    Ok(section("service-details", "Service Details")
        .child(grid)
        .child_opt(requirements)
        .child(description)
        .into())
}

/// Client details: name with verification badge, contact details and
/// membership year.
pub fn client_details(
    record: &QuoteRecord,
    ctx: &RenderContext<'_>,
) -> Result<Node, SectionError> {
    let title = if ctx.role == Role::Client {
        "Your Details"
    } else {
        "Client Details"
    };

    let mut name = el("span")
        .class("client-name")
        .text(non_blank(record.client_name.as_deref()).unwrap_or(NOT_AVAILABLE));
    if record.client_verified {
        name = name.child(el("span").class("badge").class("badge-verified").text("Verified"));
    }

    let mut grid = el("div").class("info-grid").children(info_row("Name", name));
    let mut member_since = None;

    if let Some(client) = &record.client {
        if let Some(email) = non_blank(client.email.as_deref()) {
            grid = grid.children(info_row("Email", email));
        }
        if let Some(phone) = non_blank(client.contact_number.as_deref()) {
            grid = grid.children(info_row("Phone", phone));
        }
        if let Some(raw) = non_blank(client.created_at.as_deref()) {
            let year = format::year_field("client.createdAt", raw, ctx.config.style.timezone)?;
            member_since = Some(
                el("p")
                    .class("member-since")
                    .text(format!("Member since {year}")),
            );
        }
    }

    Ok(section("client-details", title)
        .child(grid)
        .child_opt(member_since)
        .into())
}

/// Response block. Pending records get a fixed placeholder and no figures;
/// everything else gets the price breakdown and the provider's text.
pub fn quote_response(
    record: &QuoteRecord,
    ctx: &RenderContext<'_>,
) -> Result<Node, SectionError> {
    let title = if ctx.role == Role::Provider {
        "Your Quote"
    } else {
        "Provider Quote"
    };
    let block = section("quote-response", title);

    if record.status == QuoteStatus::Pending {
        return Ok(block
            .child(el("div").class("response-pending").text(RESPONSE_PENDING))
            .into());
    }

    let price = record.quoted_price();
    let travel_fee = record.travel_fee();
    let price_label = price.map_or_else(|| NOT_QUOTED.to_string(), |p| ctx.money(p));

    let mut details = el("div")
        .class("info-grid")
        .class("response-details")
        .children(info_row("Quoted Price", price_label.clone()))
        .children(info_row(
            "Estimated Duration",
            record
                .duration_hours
                .map_or_else(|| NOT_SPECIFIED.to_string(), format::hours),
        ));
    if travel_fee.amount.is_sign_positive() && !travel_fee.is_zero() {
        details = details.children(info_row("Travel Fee", ctx.money(travel_fee)));
    }

    let total_label = match price {
        Some(p) => ctx.money(
            p.checked_add(travel_fee)
                .ok_or(SectionError::AmountOverflow { field: "total" })?,
        ),
        None => NOT_QUOTED.to_string(),
    };
    let summary = el("div")
        .class("price-summary")
        .child(price_line("Service Price", price_label, false))
        .child(price_line("Travel Fee", ctx.money(travel_fee), false))
        .child(price_line("Total", total_label, true));

    let response_text = record
        .response_text()
        .map(|text| text_block("response-text", "Quote Details", text));
    let terms = non_blank(record.terms_and_conditions.as_deref())
        .map(|text| text_block("terms", "Terms & Conditions", text));
    let expiry = match non_blank(record.expires_at.as_deref()) {
        Some(raw) => Some(
            el("p")
                .class("expiry-line")
                .text(format!("Valid until {}", ctx.timestamp("expiresAt", raw)?)),
        ),
        None => None,
    };

    Ok(block
        .child(el("div").class("response-grid").child(details).child(summary))
        .child_opt(response_text)
        .child_opt(terms)
        .child_opt(expiry)
        .into())
}

fn price_line(label: &str, value: String, total: bool) -> Element {
    let line = el("div")
        .class("price-line")
        .child(el("span").text(label))
        .child(el("span").text(value));
    if total { line.class("price-total") } else { line }
}

/// Kind of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEventKind {
    /// Request created.
    Created,
    /// Provider sent the quote.
    Sent,
    /// Client accepted.
    Accepted,
    /// Client declined.
    Declined,
    /// Provider withdrew.
    Withdrawn,
}

impl TimelineEventKind {
    const fn css_class(self) -> &'static str {
        match self {
            Self::Created => "timeline-created",
            Self::Sent => "timeline-sent",
            Self::Accepted => "timeline-accepted",
            Self::Declined => "timeline-declined",
            Self::Withdrawn => "timeline-withdrawn",
        }
    }

    const fn title(self, role: Role) -> &'static str {
        match (self, role) {
            (Self::Created, Role::Client) => "You requested a quote",
            (Self::Created, _) => "Quote requested",
            (Self::Sent, Role::Provider) => "You sent the quote",
            (Self::Sent, _) => "Quote sent by provider",
            (Self::Accepted, Role::Client) => "You accepted the quote",
            (Self::Accepted, _) => "Quote accepted by client",
            (Self::Declined, Role::Client) => "You declined the quote",
            (Self::Declined, _) => "Quote declined by client",
            (Self::Withdrawn, Role::Provider) => "You withdrew the quote",
            (Self::Withdrawn, _) => "Quote withdrawn by provider",
        }
    }
}

/// One rendered timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Entry kind.
    pub kind: TimelineEventKind,
    /// Entry heading.
    pub title: &'static str,
    /// Formatted time, or the fixed caption for entries without one.
    pub detail: String,
}

/// Timeline entries in lifecycle order. The accepted, declined and
/// withdrawn entries are mutually exclusive because each requires a
/// different status.
pub fn timeline_events(
    record: &QuoteRecord,
    ctx: &RenderContext<'_>,
) -> Result<Vec<TimelineEvent>, SectionError> {
    let event = |kind: TimelineEventKind, detail: String| TimelineEvent {
        kind,
        title: kind.title(ctx.role),
        detail,
    };

    let created = match non_blank(record.created_at.as_deref()) {
        Some(raw) => ctx.timestamp("createdAt", raw)?,
        None => NOT_AVAILABLE.to_string(),
    };
    let mut events = vec![event(TimelineEventKind::Created, created)];

    if record.status != QuoteStatus::Pending {
        if let Some(raw) = non_blank(record.responded_at.as_deref()) {
            events.push(event(TimelineEventKind::Sent, ctx.timestamp("respondedAt", raw)?));
        }
    }

    let client_responded = non_blank(record.client_responded_at.as_deref());
    match (&record.status, client_responded) {
        (QuoteStatus::Accepted, Some(raw)) => events.push(event(
            TimelineEventKind::Accepted,
            ctx.timestamp("clientRespondedAt", raw)?,
        )),
        (QuoteStatus::Rejected, Some(raw)) => events.push(event(
            TimelineEventKind::Declined,
            ctx.timestamp("clientRespondedAt", raw)?,
        )),
        (QuoteStatus::Withdrawn, _) => events.push(event(
            TimelineEventKind::Withdrawn,
            WITHDRAWN_CAPTION.to_string(),
        )),
        _ => {}
    }

    Ok(events)
}

/// Timeline block built from [`timeline_events`].
pub fn timeline(record: &QuoteRecord, ctx: &RenderContext<'_>) -> Result<Node, SectionError> {
    let items = timeline_events(record, ctx)?.into_iter().map(|event| {
        el("li")
            .class("timeline-item")
            .class(event.kind.css_class())
            .child(el("span").class("timeline-marker"))
            .child(
                el("div")
                    .class("timeline-content")
                    .child(el("div").class("timeline-title").text(event.title))
                    .child(el("div").class("timeline-time").text(event.detail)),
            )
    });

    Ok(section("timeline", "Timeline")
        .child(el("ol").class("timeline").children(items))
        .into())
}

/// Print and close controls, hidden on paper.
#[must_use]
pub fn print_controls() -> Node {
    el("div")
        .class("print-controls")
        .class("no-print")
        .child(
            el("button")
                .attr("type", "button")
                .class("btn")
                .class("btn-print")
                .attr("onclick", "window.print()")
                .text("Print Report"),
        )
        .child(
            el("button")
                .attr("type", "button")
                .class("btn")
                .class("btn-close")
                .attr("onclick", "window.close()")
                .text("Close"),
        )
        .into()
}

/// Stand-in for a section whose generator failed.
#[must_use]
pub fn unavailable(title: &str) -> Node {
    section("unavailable", title)
        .child(el("p").class("placeholder").text(SECTION_UNAVAILABLE))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use crate::quote::{ClientProfile, ServiceCategory};

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap()
    }

    fn ctx(config: &ReportConfig, role: Role) -> RenderContext<'_> {
        RenderContext::new(config, generated_at()).with_role(role)
    }

    fn quoted_record() -> QuoteRecord {
        QuoteRecord {
            created_at: Some("2026-01-05T10:00:00Z".into()),
            responded_at: Some("2026-01-06T15:45:00Z".into()),
            expires_at: Some("2026-01-20T00:00:00Z".into()),
            quoted_price: Some(dec!(1250.5)),
            travel_fee: Some(dec!(75)),
            duration_hours: Some(dec!(3)),
            provider_response: Some("Includes materials.".into()),
            ..QuoteRecord::new(7, QuoteStatus::Quoted)
        }
    }

    fn texts(node: &Node, class: &str) -> Vec<String> {
        node.find_by_class(class)
            .into_iter()
            .map(|element| Node::from(element.clone()).text_content())
            .collect()
    }

    #[test]
    fn test_header_shows_company_number_status_and_role() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            quote_number: Some("HM-2026-0007".into()),
            ..QuoteRecord::new(7, QuoteStatus::Accepted)
        };
        let node = header(&record, &ctx(&config, Role::Provider)).unwrap();

        assert_eq!(texts(&node, "company-name"), ["HireMe"]);
        assert_eq!(texts(&node, "quote-number"), ["Quote #HM-2026-0007"]);
        assert_eq!(texts(&node, "badge-accepted"), ["Accepted"]);
        assert_eq!(
            texts(&node, "generated-at"),
            ["Generated Feb 1, 2026, 9:30 AM | Prepared for: Provider"]
        );
    }

    #[test]
    fn test_unknown_status_badge_is_generic() {
        let badge = status_badge(&QuoteStatus::from("on_hold"));
        assert!(badge.has_class("badge-unknown"));
        assert_eq!(badge.attr_value("data-status"), Some("on_hold"));
        assert_eq!(Node::from(badge).text_content(), "Unknown Status");
    }

    #[test]
    fn test_quote_info_expiry_only_for_quoted() {
        let config = ReportConfig::default();
        let quoted = quote_info(&quoted_record(), &ctx(&config, Role::Provider)).unwrap();
        assert!(quoted.text_content().contains("Expires"));

        let accepted = QuoteRecord {
            status: QuoteStatus::Accepted,
            ..quoted_record()
        };
        let accepted = quote_info(&accepted, &ctx(&config, Role::Provider)).unwrap();
        assert!(!accepted.text_content().contains("Expires"));
    }

    #[test]
    fn test_quote_info_urgency_badge() {
        let config = ReportConfig::default();
        let mut record = QuoteRecord::new(1, QuoteStatus::Pending);

        record.urgency = Some("Normal".into());
        let node = quote_info(&record, &ctx(&config, Role::Client)).unwrap();
        assert!(node.find_by_class("badge-urgency").is_empty());

        record.urgency = Some("same_day".into());
        let node = quote_info(&record, &ctx(&config, Role::Client)).unwrap();
        assert_eq!(texts(&node, "badge-urgency"), ["Same Day"]);
    }

    #[test]
    fn test_quote_info_invalid_timestamp_is_section_error() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            created_at: Some("not a date".into()),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };
        let err = quote_info(&record, &ctx(&config, Role::Admin)).unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidTimestamp {
                field: "createdAt",
                value: "not a date".into()
            }
        );
    }

    #[test]
    fn test_service_details_fallbacks() {
        let config = ReportConfig::default();
        let record = QuoteRecord::new(1, QuoteStatus::Pending);
        let node = service_details(&record, &ctx(&config, Role::Client)).unwrap();

        let values = texts(&node, "info-value");
        assert_eq!(
            values,
            [NOT_AVAILABLE, NOT_AVAILABLE, NOT_SPECIFIED, NOT_SPECIFIED, NOT_AVAILABLE]
        );
        assert!(node.text_content().contains(NO_DESCRIPTION));
    }

    #[test]
    fn test_service_details_prefers_message_and_prefixes_icon() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            message: Some("Leaking pipe under the sink".into()),
            description: Some("older text".into()),
            service_category: Some(ServiceCategory {
                name: Some("Plumbing".into()),
                icon: Some("🔧".into()),
                color: Some("#123456".into()),
            }),
            requested_date: Some("2026-03-01".into()),
            requested_time: Some("14:30".into()),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };
        let node = service_details(&record, &ctx(&config, Role::Client)).unwrap();
        let content = node.text_content();

        assert!(content.contains("Leaking pipe under the sink"));
        assert!(!content.contains("older text"));
        assert!(content.contains("🔧Plumbing"));
        assert!(content.contains("March 1, 2026"));
        assert!(content.contains("2:30 PM"));
        let category = node.find_by_class("category");
        assert_eq!(category[0].attr_value("style"), Some("color: #123456"));
    }

    #[test]
    fn test_service_details_drops_unsafe_category_color() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            service_category: Some(ServiceCategory {
                name: Some("Cleaning".into()),
                icon: None,
                color: Some("red; background: url(x)".into()),
            }),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };
        let node = service_details(&record, &ctx(&config, Role::Client)).unwrap();
        assert_eq!(node.find_by_class("category")[0].attr_value("style"), None);
    }

    #[test]
    fn test_client_details_by_role() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            client_name: Some("Ana Reyes".into()),
            client_verified: true,
            client: Some(ClientProfile {
                email: Some("ana@example.com".into()),
                contact_number: None,
                created_at: Some("2023-06-01T00:00:00Z".into()),
            }),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };

        let as_client = client_details(&record, &ctx(&config, Role::Client)).unwrap();
        assert_eq!(texts(&as_client, "section-title"), ["Your Details"]);
        assert_eq!(texts(&as_client, "badge-verified"), ["Verified"]);
        assert_eq!(texts(&as_client, "member-since"), ["Member since 2023"]);
        assert!(as_client.text_content().contains("ana@example.com"));
        assert!(!as_client.text_content().contains("Phone"));

        let as_provider = client_details(&record, &ctx(&config, Role::Provider)).unwrap();
        assert_eq!(texts(&as_provider, "section-title"), ["Client Details"]);
    }

    #[test]
    fn test_pending_response_has_no_money() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            quoted_price: Some(dec!(99)),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };
        let node = quote_response(&record, &ctx(&config, Role::Provider)).unwrap();

        assert_eq!(texts(&node, "response-pending"), [RESPONSE_PENDING]);
        assert_eq!(texts(&node, "section-title"), ["Your Quote"]);
        assert!(!node.text_content().contains('$'));
    }

    #[test]
    fn test_response_price_summary() {
        let config = ReportConfig::default();
        let node = quote_response(&quoted_record(), &ctx(&config, Role::Client)).unwrap();

        assert_eq!(texts(&node, "section-title"), ["Provider Quote"]);
        assert_eq!(
            texts(&node, "price-line"),
            [
                "Service Price$1,250.50",
                "Travel Fee$75.00",
                "Total$1,325.50"
            ]
        );
        assert_eq!(texts(&node, "expiry-line"), ["Valid until Jan 20, 2026, 12:00 AM"]);
        assert!(node.text_content().contains("3 hours"));
        assert!(node.text_content().contains("Includes materials."));
    }

    #[test]
    fn test_response_without_price() {
        let config = ReportConfig::default();
        let record = QuoteRecord::new(1, QuoteStatus::Rejected);
        let node = quote_response(&record, &ctx(&config, Role::Admin)).unwrap();

        let lines = texts(&node, "price-line");
        assert_eq!(lines[0], format!("Service Price{NOT_QUOTED}"));
        assert_eq!(lines[2], format!("Total{NOT_QUOTED}"));
        let details = Node::from(node.find_by_class("response-details")[0].clone());
        assert!(!details.text_content().contains("Travel Fee"));
    }

    #[test]
    fn test_response_total_overflow_is_section_error() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            quoted_price: Some(rust_decimal::Decimal::MAX),
            travel_fee: Some(dec!(1)),
            ..quoted_record()
        };
        let err = quote_response(&record, &ctx(&config, Role::Client)).unwrap_err();
        assert_eq!(err, SectionError::AmountOverflow { field: "total" });
    }

    #[test]
    fn test_timeline_accepted_has_three_entries() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            status: QuoteStatus::Accepted,
            client_responded_at: Some("2026-01-07T08:00:00Z".into()),
            ..quoted_record()
        };
        let events = timeline_events(&record, &ctx(&config, Role::Client)).unwrap();
        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();

        assert_eq!(
            kinds,
            [
                TimelineEventKind::Created,
                TimelineEventKind::Sent,
                TimelineEventKind::Accepted
            ]
        );
        assert_eq!(events[2].title, "You accepted the quote");
        assert_eq!(events[2].detail, "Jan 7, 2026, 8:00 AM");
    }

    #[test]
    fn test_timeline_declined_has_three_entries() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            status: QuoteStatus::Rejected,
            client_responded_at: Some("2026-01-08T17:30:00Z".into()),
            ..quoted_record()
        };
        let events = timeline_events(&record, &ctx(&config, Role::Provider)).unwrap();
        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();

        assert_eq!(
            kinds,
            [
                TimelineEventKind::Created,
                TimelineEventKind::Sent,
                TimelineEventKind::Declined
            ]
        );
        assert_eq!(events[1].title, "You sent the quote");
        assert_eq!(events[2].title, "Quote declined by client");
        assert_eq!(events[2].detail, "Jan 8, 2026, 5:30 PM");
    }

    #[test]
    fn test_timeline_without_response_time_has_no_sent_entry() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            responded_at: None,
            client_responded_at: Some("2026-01-07T08:00:00Z".into()),
            status: QuoteStatus::Accepted,
            ..quoted_record()
        };
        let events = timeline_events(&record, &ctx(&config, Role::Admin)).unwrap();
        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();

        assert_eq!(kinds, [TimelineEventKind::Created, TimelineEventKind::Accepted]);
    }

    #[test]
    fn test_timeline_pending_ignores_response_time() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            responded_at: Some("2026-01-06T15:45:00Z".into()),
            ..QuoteRecord::new(1, QuoteStatus::Pending)
        };
        let events = timeline_events(&record, &ctx(&config, Role::Provider)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].detail, NOT_AVAILABLE);
    }

    #[test]
    fn test_timeline_withdrawn_has_fixed_caption() {
        let config = ReportConfig::default();
        let record = QuoteRecord {
            status: QuoteStatus::Withdrawn,
            client_responded_at: Some("2026-01-07T08:00:00Z".into()),
            ..quoted_record()
        };
        let node = timeline(&record, &ctx(&config, Role::Provider)).unwrap();

        assert_eq!(node.find_by_class("timeline-item").len(), 3);
        let withdrawn = Node::from(node.find_by_class("timeline-withdrawn")[0].clone());
        assert_eq!(
            withdrawn.text_content(),
            format!("You withdrew the quote{WITHDRAWN_CAPTION}")
        );
    }

    #[test]
    fn test_print_controls_are_hidden_on_paper() {
        let node = print_controls();
        let root = node.as_element().unwrap();
        assert!(root.has_class("no-print"));
        assert_eq!(node.find_by_class("btn-print")[0].attr_value("onclick"), Some("window.print()"));
        assert_eq!(node.find_by_class("btn-close")[0].attr_value("onclick"), Some("window.close()"));
    }
}
