use clap::ValueEnum;
use poolprof_cache::{report, SummaryReport};

/// How a report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned plain text with a hit ratio line
    Text,
    /// Styled HTML fragments
    Html,
    /// Pretty-printed JSON, readable by `render` and `merge`
    Json,
    /// Prometheus text exposition
    Prometheus,
}

impl ReportFormat {
    pub fn render(self, report: &SummaryReport) -> eyre::Result<String> {
        let output = match self {
            ReportFormat::Text => report::render_text(report),
            ReportFormat::Html => report::render_html(report),
            ReportFormat::Json => report::render_json(report)?,
            ReportFormat::Prometheus => report::render_prometheus(report)?,
        };
        Ok(output)
    }
}
