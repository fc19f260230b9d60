use thiserror::Error;

/// Errors raised while turning task records into scored tasks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A bounded numeric field is outside 1-10.
    #[error("task '{task}': {field} must be between 1 and 10, got {value}")]
    Validation {
        task: String,
        field: &'static str,
        value: i32,
    },

    /// A deadline string is not a `YYYY-MM-DD` calendar date.
    #[error("task '{task}': invalid deadline '{value}', expected YYYY-MM-DD")]
    DateParse { task: String, value: String },

    /// A task has a blank name. `index` is its 0-based position in the input,
    /// when known (a single task scored on its own has none).
    #[error("{}: name must not be empty", describe_position(.index))]
    EmptyName { index: Option<usize> },
}

fn describe_position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("task #{}", i + 1),
        None => "task".to_string(),
    }
}

impl ScoreError {
    /// Name of the task the error refers to, when it has one.
    pub fn task_name(&self) -> Option<&str> {
        match self {
            ScoreError::Validation { task, .. } | ScoreError::DateParse { task, .. } => Some(task),
            ScoreError::EmptyName { .. } => None,
        }
    }
}
