use crate::error::ScoreError;
use crate::task::Task;

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 10;

/// Validate the name and bounded fields of a task.
/// Returns all validation errors at once (not just the first).
pub fn validate_task(task: &Task) -> Result<(), Vec<ScoreError>> {
    let mut errors = Vec::new();
    if task.name.trim().is_empty() {
        errors.push(ScoreError::EmptyName { index: None });
    }

    errors.extend([
        ("urgency", task.urgency),
        ("importance", task.importance),
        ("effort", task.effort),
    ]
    .into_iter()
    .filter(|(_, value)| !(MIN_RATING..=MAX_RATING).contains(value))
    .map(|(field, value)| ScoreError::Validation {
        task: task.name.clone(),
        field,
        value,
    }));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_task() {
        assert!(validate_task(&Task::new("ok", 1, 10, 5)).is_ok());
    }

    #[test]
    fn test_urgency_too_high() {
        let errors = validate_task(&Task::new("hot", 11, 5, 5)).unwrap_err();
        assert_eq!(
            errors,
            vec![ScoreError::Validation {
                task: "hot".to_string(),
                field: "urgency",
                value: 11,
            }]
        );
    }

    #[test]
    fn test_effort_zero() {
        let errors = validate_task(&Task::new("free", 5, 5, 0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("effort"));
    }

    #[test]
    fn test_negative_importance() {
        let errors = validate_task(&Task::new("meh", 5, -3, 5)).unwrap_err();
        assert!(errors[0].to_string().contains("got -3"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_task(&Task::new("bad", 0, 11, 42)).unwrap_err();
        let fields: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ScoreError::Validation { field, .. } => *field,
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(fields, vec!["urgency", "importance", "effort"]);
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_task(&Task::new("", 5, 5, 5)).unwrap_err();
        assert_eq!(errors, vec![ScoreError::EmptyName { index: None }]);
    }

    #[test]
    fn test_blank_name_reported_with_range_errors() {
        let errors = validate_task(&Task::new("   ", 5, 5, 11)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ScoreError::EmptyName { index: None });
        assert!(errors[1].to_string().contains("effort"));
    }
}
