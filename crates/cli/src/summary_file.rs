//! Reading profile summaries back from disk

use eyre::WrapErr;
use poolprof_cache::{PoolSummary, ProfileSummary, SummaryReport};
use serde::Deserialize;
use std::path::Path;

/// Either a full report written with `--format json` or a bare summary
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummaryFile {
    Report(SummaryReport),
    Summary(ProfileSummary),
}

impl SummaryFile {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("{} is not a profile summary", path.display()))
    }

    /// The counts this file contributes: a report's total or the bare summary
    pub fn total(&self) -> ProfileSummary {
        match self {
            SummaryFile::Report(report) => report.total,
            SummaryFile::Summary(summary) => *summary,
        }
    }

    /// Pool lines for this file, labelling a bare summary with `name`
    pub fn into_pools(self, name: &str) -> Vec<PoolSummary> {
        match self {
            SummaryFile::Report(report) => report.pools,
            SummaryFile::Summary(summary) => vec![PoolSummary {
                name: name.to_string(),
                summary,
            }],
        }
    }
}

/// Label used for a file in merged output
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
