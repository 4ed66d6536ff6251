use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// One named comparison between a baseline corpus and a skills corpus.
///
/// Descriptors are read-only input; they keep the JSON field spelling of the
/// scenario format (`expectedReduction`, nested `files` lists).
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub baseline: FileSet,
    pub skills: FileSet,
    #[serde(rename = "expectedReduction")]
    pub expected_reduction: f64,
}

/// Ordered list of corpus file paths. Relative paths resolve against the
/// process working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSet {
    pub files: Vec<PathBuf>,
}

/// Enumerates scenario descriptors (`*.json`) in `dir`, sorted by file name.
///
/// A missing directory or an empty match set is a fatal precondition failure:
/// the run must abort before producing any report or export.
pub fn discover_scenarios(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("scenarios directory not found: {}", dir.display());
    }

    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("read scenarios directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    if entries.is_empty() {
        bail!("no scenario files found in {}", dir.display());
    }

    tracing::debug!(count = entries.len(), dir = %dir.display(), "discovered scenario descriptors");
    Ok(entries.into_iter().map(|entry| entry.path()).collect())
}

/// Loads a single descriptor. Failures here are per-scenario errors: the
/// caller skips the scenario and keeps going.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))
}
