use owo_colors::OwoColorize;

use crate::scoring::ScoredTask;

pub const HIGH_PRIORITY_THRESHOLD: f64 = 7.0;
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 4.0;

/// Summary statistics over a set of scored tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_tasks: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub average_urgency: f64,
    pub high_priority_tasks: usize,   // score >= 7.0
    pub medium_priority_tasks: usize, // 4.0 <= score < 7.0
    pub low_priority_tasks: usize,    // score < 4.0
}

impl Statistics {
    /// Returns `None` when there is nothing to summarize.
    pub fn from_scored(tasks: &[ScoredTask]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }

        let count = tasks.len() as f64;
        let scores = tasks.iter().map(|t| t.score);
        let total_score: f64 = scores.clone().sum();
        let total_urgency: f64 = tasks.iter().map(|t| f64::from(t.task.urgency)).sum();

        let high = tasks
            .iter()
            .filter(|t| t.score >= HIGH_PRIORITY_THRESHOLD)
            .count();
        let low = tasks
            .iter()
            .filter(|t| t.score < MEDIUM_PRIORITY_THRESHOLD)
            .count();

        Some(Self {
            total_tasks: tasks.len(),
            average_score: round_to_hundredth(total_score / count),
            highest_score: scores.clone().fold(f64::MIN, f64::max),
            lowest_score: scores.fold(f64::MAX, f64::min),
            average_urgency: round_to_hundredth(total_urgency / count),
            high_priority_tasks: high,
            medium_priority_tasks: tasks.len() - high - low,
            low_priority_tasks: low,
        })
    }
}

fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-column statistics block
pub fn format_statistics(stats: &Statistics, use_colors: bool) -> String {
    let rows = [
        (
            ("Total Tasks:", stats.total_tasks.to_string()),
            ("High Priority (>=7.0):", stats.high_priority_tasks.to_string()),
        ),
        (
            ("Average Score:", format!("{:.2}", stats.average_score)),
            ("Medium Priority (4-7):", stats.medium_priority_tasks.to_string()),
        ),
        (
            ("Highest Score:", format!("{:.1}", stats.highest_score)),
            ("Low Priority (<4.0):", stats.low_priority_tasks.to_string()),
        ),
        (
            ("Lowest Score:", format!("{:.1}", stats.lowest_score)),
            ("Average Urgency:", format!("{:.2}", stats.average_urgency)),
        ),
    ];

    rows.iter()
        .map(|((l1, v1), (l2, v2))| {
            let left = format!("{:<25}", l1);
            let right = format!("{:<25}", l2);
            if use_colors {
                format!("{}{:<15}{}{}", left.dimmed(), v1.bold(), right.dimmed(), v2.bold())
            } else {
                format!("{}{:<15}{}{}", left, v1, right, v2)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
