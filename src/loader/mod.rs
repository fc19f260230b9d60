use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ScoreError;
use crate::task::{Priority, Status, Task};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Top-level layout of a task file: `{"tasks": [...]}`.
#[derive(Debug, Deserialize)]
struct TaskFile {
    #[serde(default)]
    tasks: Vec<RawTask>,
}

/// A task as written on disk, before the deadline has been parsed.
/// Unknown fields (e.g. `score` in an exported file) are ignored.
#[derive(Debug, Deserialize)]
struct RawTask {
    name: String,
    urgency: i32,
    importance: i32,
    effort: i32,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    status: Status,
    #[serde(default)]
    priority: Priority,
}

/// Errors found in otherwise well-formed task records.
#[derive(Debug)]
pub struct InvalidTasks(pub Vec<ScoreError>);

impl std::fmt::Display for InvalidTasks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} invalid task record(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidTasks {}

/// Load tasks from a JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The JSON cannot be parsed
/// - Any record has an empty name or a malformed deadline ([`InvalidTasks`],
///   carrying every such record, not just the first)
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        anyhow::bail!("Task file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file at {}", path.display()))?;

    let tasks = parse_tasks(&content)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?;

    tracing::debug!(count = tasks.len(), path = %path.display(), "loaded tasks");
    Ok(tasks)
}

/// Parse tasks from JSON text. See [`load_tasks`].
pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    let file: TaskFile = serde_json::from_str(json).context("Invalid JSON in task file")?;

    let mut tasks = Vec::with_capacity(file.tasks.len());
    let mut errors = Vec::new();

    for (index, raw) in file.tasks.into_iter().enumerate() {
        match raw.into_task(index) {
            Ok(task) => tasks.push(task),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(tasks)
    } else {
        Err(InvalidTasks(errors).into())
    }
}

/// Parse a `YYYY-MM-DD` deadline. Blank input means no deadline.
/// Month and day must be zero-padded; `2026-1-5` is rejected.
pub fn parse_deadline(task: &str, value: &str) -> Result<Option<NaiveDate>, ScoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let date_error = || ScoreError::DateParse {
        task: task.to_string(),
        value: value.to_string(),
    };
    if !is_padded_iso_date(value) {
        return Err(date_error());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| date_error())
}

/// `chrono` accepts unpadded fields for `%m`/`%d`, so check the shape first.
fn is_padded_iso_date(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl RawTask {
    fn into_task(self, index: usize) -> Result<Task, ScoreError> {
        if self.name.trim().is_empty() {
            return Err(ScoreError::EmptyName { index: Some(index) });
        }

        let deadline = match self.deadline.as_deref() {
            Some(s) => parse_deadline(&self.name, s)?,
            None => None,
        };

        Ok(Task {
            name: self.name,
            urgency: self.urgency,
            importance: self.importance,
            effort: self.effort,
            deadline,
            status: self.status,
            priority: self.priority,
        })
    }
}
