//! Human and machine readable renderings of profile summaries
//!
//! Every renderer lists all five event kinds with their counts. The HTML
//! output is a self-contained fragment meant to be dropped into a page
//! footer; names are escaped, counts are plain integers.

use crate::aggregate::SummaryReport;
use crate::metrics::{ProfileEvent, ProfileSummary};
use poolprof_core::{PoolError, Result};
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::fmt::Write;

const REPORT_STYLE: &str = "<style>\
.cache-accessed { background-color: #468847; border-radius: 3px; color: #FFF; padding: 2px 4px; }\
.cache-missed { background-color: #B94A48; border-radius: 3px; color: #FFF; padding: 2px 4px; }\
.cache-saved { background-color: #0694F8; border-radius: 3px; color: #FFF; padding: 2px 4px; }\
.cache-deleted { background-color: #F89406; border-radius: 3px; color: #FFF; padding: 2px 4px; }\
.cache-cleaned { background-color: #F894F8; border-radius: 3px; color: #FFF; padding: 2px 4px; }\
</style>";

/// One-line text rendering of an arbitrary summary
pub fn summary_text(summary: &ProfileSummary) -> String {
    format!("Cache profile summary: {summary}")
}

/// HTML rendering of an arbitrary, externally supplied summary
pub fn summary_html(summary: &ProfileSummary) -> String {
    let parts: Vec<String> = summary
        .iter()
        .map(|(event, count)| format!("{event}={count}"))
        .collect();
    format!(
        "<div id=\"cache-summary\">Cache Profile Summary: {}</div>",
        parts.join(" / ")
    )
}

/// Styled HTML fragment for a single named pool
pub fn pool_html(name: &str, summary: &ProfileSummary) -> String {
    let mut html = String::new();
    html.push_str(REPORT_STYLE);
    push_pool_fragment(&mut html, name, summary);
    html
}

fn push_pool_fragment(html: &mut String, name: &str, summary: &ProfileSummary) {
    let _ = write!(
        html,
        "<div class=\"cache-summary\"><h2>Cache {} pool</h2><ul>",
        escape_html(name)
    );
    for (event, count) in summary.iter() {
        let _ = write!(
            html,
            "<li><span class=\"{}\">{event}={count}</span></li>",
            css_class(event)
        );
    }
    html.push_str("</ul></div>");
}

fn css_class(event: ProfileEvent) -> &'static str {
    match event {
        ProfileEvent::Accessed => "cache-accessed",
        ProfileEvent::Missed => "cache-missed",
        ProfileEvent::Deleted => "cache-deleted",
        ProfileEvent::Cleaned => "cache-cleaned",
        ProfileEvent::Saved => "cache-saved",
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Plain text report: one line per pool, then the total
pub fn render_text(report: &SummaryReport) -> String {
    let mut text = String::new();
    let width = report
        .pools
        .iter()
        .map(|pool| pool.name.len())
        .max()
        .unwrap_or(0)
        .max("total".len());

    for pool in &report.pools {
        let _ = writeln!(text, "{:<width$}  {}", pool.name, pool.summary);
    }
    let _ = writeln!(text, "{:<width$}  {}", "total", report.total);

    if let Some(ratio) = report.total.hit_ratio() {
        let _ = writeln!(text, "hit ratio: {:.1}%", ratio * 100.0);
    }
    text
}

/// HTML report: a styled fragment per pool followed by the merged summary
pub fn render_html(report: &SummaryReport) -> String {
    let mut html = String::new();
    html.push_str(REPORT_STYLE);
    for pool in &report.pools {
        push_pool_fragment(&mut html, &pool.name, &pool.summary);
    }
    html.push_str(&summary_html(&report.total));
    html
}

/// Pretty-printed JSON report
pub fn render_json(report: &SummaryReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| PoolError::export("json", e.to_string()))
}

/// Prometheus text exposition of every pool's counts
///
/// Each count becomes a sample of `poolprof_cache_events_total` labelled with
/// the pool name and event kind. The merged total is not exported since it can
/// be derived with `sum by (event)`.
pub fn render_prometheus(report: &SummaryReport) -> Result<String> {
    let registry = Registry::new();
    let events = IntCounterVec::new(
        Opts::new(
            "poolprof_cache_events_total",
            "Cache pool events recorded since the last reset",
        ),
        &["pool", "event"],
    )
    .map_err(|e| PoolError::export("prometheus", e.to_string()))?;
    registry
        .register(Box::new(events.clone()))
        .map_err(|e| PoolError::export("prometheus", e.to_string()))?;

    for pool in &report.pools {
        for (event, count) in pool.summary.iter() {
            events
                .with_label_values(&[pool.name.as_str(), event.as_str()])
                .inc_by(count);
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buffer)
        .map_err(|e| PoolError::export("prometheus", e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| PoolError::export("prometheus", e.to_string()))
}
