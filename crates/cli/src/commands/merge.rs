use crate::summary_file::{file_label, SummaryFile};
use poolprof_cache::{PoolSummary, SummaryReport};
use std::path::PathBuf;

/// One line per file, carrying that file's total, summed into a new total
pub fn execute(files: &[PathBuf]) -> eyre::Result<SummaryReport> {
    let mut pools = Vec::with_capacity(files.len());
    for path in files {
        let file = SummaryFile::load(path)?;
        pools.push(PoolSummary {
            name: file_label(path),
            summary: file.total(),
        });
    }
    tracing::info!(files = files.len(), "Merged profile summaries");
    Ok(SummaryReport::from_pools(pools))
}
