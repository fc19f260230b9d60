use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use super::config::WEIGHTS;
use super::factors::{deadline_bucket, effort_score, DeadlineBucket, NO_DEADLINE_SCORE};
use super::validation::validate_task;
use crate::error::ScoreError;
use crate::task::Task;

/// The four sub-scores that feed the weighted sum, each on its own scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub urgency_score: f64,
    pub importance_score: f64,
    pub deadline_score: f64,
    pub effort_score: f64,
}

impl ScoreBreakdown {
    /// Weighted contributions in formula order: urgency, importance, deadline, effort.
    pub fn contributions(&self) -> [(&'static str, f64, f64); 4] {
        [
            ("Urgency", self.urgency_score, WEIGHTS.urgency_weight),
            ("Importance", self.importance_score, WEIGHTS.importance_weight),
            ("Deadline", self.deadline_score, WEIGHTS.deadline_weight),
            ("Effort", self.effort_score, WEIGHTS.effort_weight),
        ]
    }

    pub fn weighted_sum(&self) -> f64 {
        self.contributions()
            .iter()
            .map(|(_, score, weight)| score * weight)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Canonical score, rounded to one decimal place.
    pub score: f64,
    #[serde(skip)]
    pub raw_score: f64,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    #[serde(skip)]
    pub deadline_bucket: Option<DeadlineBucket>,
    #[serde(skip)]
    pub days_until: Option<i64>,
}

/// Score a single task against `today`.
///
/// Fails with the first out-of-range field; the task is never clamped.
pub fn score_task(task: &Task, today: NaiveDate) -> Result<ScoredTask, ScoreError> {
    if let Err(mut errors) = validate_task(task) {
        return Err(errors.remove(0));
    }
    Ok(score_validated(task, today))
}

fn score_validated(task: &Task, today: NaiveDate) -> ScoredTask {
    let bucket = deadline_bucket(task.deadline, today);
    let breakdown = ScoreBreakdown {
        urgency_score: f64::from(task.urgency),
        importance_score: f64::from(task.importance),
        deadline_score: bucket.map_or(NO_DEADLINE_SCORE, |b| b.score()),
        effort_score: effort_score(task.effort),
    };
    let raw_score = breakdown.weighted_sum();

    ScoredTask {
        task: task.clone(),
        score: round_to_tenth(raw_score),
        raw_score,
        breakdown,
        deadline_bucket: bucket,
        days_until: task.days_until(today),
    }
}

/// Score every task and order the results, highest priority first.
///
/// Ordering: score descending, then importance descending, then urgency
/// descending, then input order. If any task is invalid, every failure is
/// returned (in input order) and nothing is ranked.
pub fn rank(tasks: &[Task], today: NaiveDate) -> Result<Vec<ScoredTask>, Vec<ScoreError>> {
    let mut scored = Vec::with_capacity(tasks.len());
    let mut errors = Vec::new();

    for (position, task) in tasks.iter().enumerate() {
        match validate_task(task) {
            Ok(()) => scored.push(score_validated(task, today)),
            Err(task_errors) => errors.extend(task_errors.into_iter().map(|e| match e {
                ScoreError::EmptyName { .. } => ScoreError::EmptyName {
                    index: Some(position),
                },
                other => other,
            })),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // sort_by is stable, so equal keys keep input order
    scored.sort_by(compare_priority);
    Ok(scored)
}

fn compare_priority(a: &ScoredTask, b: &ScoredTask) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.task.importance.cmp(&a.task.importance))
        .then_with(|| b.task.urgency.cmp(&a.task.urgency))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
