use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::scoring::{ScoredTask, ScoringWeights, WEIGHTS};

/// Exported results document. The `tasks` array can be loaded back as input.
#[derive(Debug, Serialize)]
pub struct ExportReport<'a> {
    pub scored_at: DateTime<Utc>,
    pub total_tasks: usize,
    pub algorithm: ScoringWeights,
    pub tasks: &'a [ScoredTask],
}

impl<'a> ExportReport<'a> {
    pub fn new(tasks: &'a [ScoredTask], scored_at: DateTime<Utc>) -> Self {
        Self {
            scored_at,
            total_tasks: tasks.len(),
            algorithm: WEIGHTS,
            tasks,
        }
    }
}

/// Render ranked tasks as pretty-printed JSON
pub fn to_json(tasks: &[ScoredTask], scored_at: DateTime<Utc>) -> Result<String> {
    serde_json::to_string_pretty(&ExportReport::new(tasks, scored_at))
        .context("Failed to serialize scored tasks")
}

/// Save ranked tasks to a JSON file atomically
///
/// Uses atomic-write-file so an existing export is never left half-written.
/// Creates the parent directory if it doesn't exist.
pub fn export_results(path: &Path, tasks: &[ScoredTask], scored_at: DateTime<Utc>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, &ExportReport::new(tasks, scored_at))
        .context("Failed to serialize scored tasks")?;
    file.write_all(b"\n")?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    tracing::debug!(count = tasks.len(), path = %path.display(), "exported results");
    Ok(())
}
