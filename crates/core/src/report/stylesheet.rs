//! Stylesheet generation.
//!
//! The stylesheet is a pure function of the resolved style settings. It is
//! built once per document and shared by every record in a batch.

use std::fmt::{self, Write};

use super::config::ReportConfig;
use crate::quote::QuoteStatus;

/// Font sizes, spacing and line height for one density tier.
struct Density {
    base_font: &'static str,
    title_font: &'static str,
    heading_font: &'static str,
    small_font: &'static str,
    line_height: &'static str,
    gap: &'static str,
    padding: &'static str,
}

const COMPACT: Density = Density {
    base_font: "11px",
    title_font: "18px",
    heading_font: "13px",
    small_font: "9px",
    line_height: "1.3",
    gap: "8px",
    padding: "8px",
};

const COMFORTABLE: Density = Density {
    base_font: "14px",
    title_font: "24px",
    heading_font: "16px",
    small_font: "12px",
    line_height: "1.6",
    gap: "16px",
    padding: "16px",
};

/// Badge `(text, background)` colors for a known status. Quoted badges use
/// the accent color.
fn status_palette<'a>(status: &QuoteStatus, primary: &'a str) -> (&'a str, &'a str) {
    match status {
        QuoteStatus::Pending => ("#856404", "#fff3cd"),
        QuoteStatus::Quoted => (primary, "#e7f1ff"),
        QuoteStatus::Accepted => ("#155724", "#d4edda"),
        QuoteStatus::Rejected => ("#721c24", "#f8d7da"),
        QuoteStatus::Withdrawn => ("#383d41", "#e2e3e5"),
        QuoteStatus::Expired => ("#8a4b08", "#ffe5d0"),
        QuoteStatus::Other(_) => ("#495057", "#f1f3f5"),
    }
}

/// Builds the complete stylesheet for a resolved configuration.
///
/// # Errors
///
/// Returns the formatter error if a rule cannot be written.
pub fn build_stylesheet(config: &ReportConfig) -> Result<String, fmt::Error> {
    let style = &config.style;
    let primary = style.primary_color.as_str();
    let d = if style.compact { &COMPACT } else { &COMFORTABLE };

    let mut css = String::with_capacity(6 * 1024);

    write!(
        css,
        "@page {{ size: {size}; margin: {margins}; }}\n\
         * {{ box-sizing: border-box; }}\n\
         body {{ margin: 0; font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; \
         font-size: {base}; line-height: {lh}; color: #212529; background: #ffffff; }}\n\
         .report-root {{ max-width: 960px; margin: 0 auto; padding: {pad}; }}\n\
         h1, h2, h3 {{ margin: 0 0 {gap} 0; }}\n\
         .report-header {{ display: flex; justify-content: space-between; align-items: flex-start; \
         border-bottom: 3px solid {primary}; padding-bottom: {pad}; margin-bottom: {gap}; }}\n\
         .company-name {{ font-size: {title}; color: {primary}; }}\n\
         .report-subtitle, .generated-at {{ font-size: {small}; color: #6c757d; margin: 0; }}\n\
         .header-meta {{ text-align: right; }}\n\
         .quote-number {{ font-size: {heading}; font-weight: 600; }}\n\
         .content-grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: {gap}; }}\n\
         .content-grid > .section-quote-response {{ grid-column: 1 / -1; }}\n\
         .report-section {{ border: 1px solid #dee2e6; border-radius: 4px; padding: {pad}; \
         margin-bottom: {gap}; break-inside: avoid; page-break-inside: avoid; }}\n\
         .section-title {{ font-size: {heading}; color: {primary}; border-bottom: 1px solid #dee2e6; \
         padding-bottom: 4px; }}\n\
         .info-grid {{ display: grid; grid-template-columns: minmax(110px, 35%) 1fr; column-gap: {gap}; row-gap: 4px; }}\n\
         .info-label {{ font-weight: 600; color: #495057; }}\n\
         .info-value {{ word-break: break-word; }}\n\
         .text-block {{ margin-top: {gap}; }}\n\
         .text-block h3 {{ font-size: {base}; margin-bottom: 4px; }}\n\
         .text-block p {{ margin: 0; white-space: pre-wrap; }}\n\
         .placeholder {{ color: #6c757d; font-style: italic; }}\n\
         .member-since {{ margin: 4px 0 0 0; font-size: {small}; color: #6c757d; }}\n",
        size = style.page_size,
        margins = style.margins,
        base = d.base_font,
        lh = d.line_height,
        pad = d.padding,
        gap = d.gap,
        title = d.title_font,
        heading = d.heading_font,
        small = d.small_font,
    )?;

    write!(
        css,
        ".badge {{ display: inline-block; padding: 2px 8px; border: 1px solid; border-radius: 10px; \
         font-size: {small}; font-weight: 600; text-transform: uppercase; letter-spacing: 0.03em; }}\n",
        small = d.small_font,
    )?;
    for status in QuoteStatus::ALL
        .iter()
        .chain(std::iter::once(&QuoteStatus::Other(String::new())))
    {
        let (fg, bg) = status_palette(status, primary);
        writeln!(
            css,
            ".{class} {{ color: {fg}; background: {bg}; border-color: {fg}; }}",
            class = status.css_class(),
        )?;
    }

    write!(
        css,
        ".badge-urgency {{ color: #ffffff; background: #dc3545; border-color: #dc3545; }}\n\
         .badge-verified {{ color: #155724; background: #d4edda; border-color: #28a745; margin-left: 6px; }}\n\
         .category-icon {{ margin-right: 4px; }}\n\
         .response-grid {{ display: grid; grid-template-columns: 3fr 2fr; gap: {gap}; }}\n\
         .response-pending {{ padding: {pad}; text-align: center; background: #fff3cd; color: #856404; border-radius: 4px; }}\n\
         .price-summary {{ border: 2px solid {primary}; border-radius: 4px; padding: {pad}; background: #f8f9fa; }}\n\
         .price-line {{ display: flex; justify-content: space-between; padding: 2px 0; }}\n\
         .price-total {{ border-top: 1px solid #adb5bd; margin-top: 4px; padding-top: 4px; font-weight: 700; \
         font-size: {heading}; color: {primary}; }}\n\
         .expiry-line {{ margin: {gap} 0 0 0; font-size: {small}; color: #8a4b08; }}\n\
         .timeline {{ list-style: none; margin: 0; padding: 0 0 0 16px; border-left: 2px solid {primary}; }}\n\
         .timeline-item {{ position: relative; padding: 0 0 {gap} 8px; }}\n\
         .timeline-marker {{ position: absolute; left: -22px; top: 4px; width: 10px; height: 10px; \
         border-radius: 50%; background: {primary}; }}\n\
         .timeline-accepted .timeline-marker {{ background: #28a745; }}\n\
         .timeline-declined .timeline-marker {{ background: #dc3545; }}\n\
         .timeline-withdrawn .timeline-marker {{ background: #6c757d; }}\n\
         .timeline-title {{ font-weight: 600; }}\n\
         .timeline-time {{ font-size: {small}; color: #6c757d; }}\n\
         .batch-summary {{ border: 2px solid {primary}; border-radius: 4px; padding: {pad}; margin-bottom: {gap}; }}\n\
         .summary-grid {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: {gap}; margin: {gap} 0; }}\n\
         .summary-card {{ border: 1px solid #dee2e6; border-radius: 4px; padding: {pad}; text-align: center; }}\n\
         .summary-count {{ display: block; font-size: {title}; font-weight: 700; color: {primary}; }}\n\
         .summary-label {{ font-size: {small}; color: #6c757d; text-transform: uppercase; }}\n\
         .summary-revenue {{ display: grid; grid-template-columns: 1fr 1fr; gap: {gap}; }}\n\
         .revenue-figure {{ font-size: {heading}; font-weight: 700; }}\n\
         .page-break {{ height: 0; break-after: page; page-break-after: always; }}\n\
         .page-break-last {{ break-after: auto; page-break-after: auto; }}\n\
         .print-controls {{ display: flex; justify-content: center; gap: {gap}; margin: {gap} 0; }}\n\
         .btn {{ padding: 6px 18px; border: 1px solid {primary}; border-radius: 4px; cursor: pointer; font-size: {base}; }}\n\
         .btn-print {{ background: {primary}; color: #ffffff; }}\n\
         .btn-close {{ background: #ffffff; color: {primary}; }}\n\
         @media print {{\n\
         \x20 .no-print {{ display: none !important; }}\n\
         \x20 .report-root {{ max-width: none; padding: 0; }}\n\
         \x20 body {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n\
         }}\n",
        gap = d.gap,
        pad = d.padding,
        heading = d.heading_font,
        small = d.small_font,
        title = d.title_font,
        base = d.base_font,
    )?;

    Ok(css)
}
