use crate::summary_file::SummaryFile;
use poolprof_cache::SummaryReport;
use poolprof_core::DEFAULT_POOL_NAME;
use std::path::Path;

pub fn execute(input: &Path, name: Option<String>) -> eyre::Result<SummaryReport> {
    let file = SummaryFile::load(input)?;
    let name = name.unwrap_or_else(|| DEFAULT_POOL_NAME.to_string());
    tracing::debug!(input = %input.display(), "Rendering saved summary");
    Ok(SummaryReport::from_pools(file.into_pools(&name)))
}
