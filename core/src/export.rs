use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::eval::{RunSummary, ScenarioResult};

#[derive(Serialize)]
struct RunExport<'a> {
    results: &'a [ScenarioResult],
    summary: &'a RunSummary,
}

/// Writes the machine-readable run artifact, replacing any previous content.
/// Missing parent directories are created first.
pub fn write_results(path: &Path, results: &[ScenarioResult], summary: &RunSummary) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &RunExport { results, summary })
        .with_context(|| format!("write {}", path.display()))
}
