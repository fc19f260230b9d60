use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{ScoredTask, WEIGHTS};

/// Task names longer than this are truncated in the table
const NAME_WIDTH: usize = 32;

/// Score band used to color a score (traffic light pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Critical,
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            ScoreBand::Critical
        } else if score >= 6.0 {
            ScoreBand::High
        } else if score >= 4.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal place
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

fn paint_score(text: &str, score: f64) -> String {
    match ScoreBand::from_score(score) {
        ScoreBand::Critical => text.red().bold().to_string(),
        ScoreBand::High => text.yellow().bold().to_string(),
        ScoreBand::Medium => text.cyan().to_string(),
        ScoreBand::Low => text.green().to_string(),
    }
}

/// Human label for the deadline column
pub fn format_deadline(days_until: Option<i64>) -> String {
    match days_until {
        None => "No deadline".to_string(),
        Some(d) if d < 0 => "OVERDUE".to_string(),
        Some(0) => "TODAY".to_string(),
        Some(1) => "Tomorrow".to_string(),
        Some(d) => format!("{} days", d),
    }
}

fn paint_deadline(text: &str, days_until: Option<i64>) -> String {
    match days_until {
        Some(d) if d <= 0 => text.red().bold().to_string(),
        Some(1..=3) => text.yellow().to_string(),
        Some(4..=7) => text.green().to_string(),
        _ => text.dimmed().to_string(),
    }
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// The first `top` tasks (all of them when `top` is None)
pub fn take_top(tasks: &[ScoredTask], top: Option<usize>) -> &[ScoredTask] {
    &tasks[..top.map_or(tasks.len(), |n| n.min(tasks.len()))]
}

/// Pad after coloring would count escape codes, so pad first.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Format ranked tasks as a table with columns:
/// Rank, Score, Task Name, Urgency, Importance, Deadline.
/// `top` limits the number of rows; ranks stay 1-based.
pub fn format_scored_table(tasks: &[ScoredTask], top: Option<usize>, use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let shown = take_top(tasks, top).len();
    let mut lines = Vec::with_capacity(shown + 2);

    let header = format!(
        "{}{}{}{}{}{}",
        pad("Rank", 6),
        pad("Score", 7),
        pad("Task Name", NAME_WIDTH + 3),
        pad("Urgency", 9),
        pad("Importance", 12),
        "Deadline"
    );
    let rule = "─".repeat(header.chars().count().min(get_terminal_width().unwrap_or(usize::MAX)));
    if use_colors {
        lines.push(header.bold().to_string());
        lines.push(rule.dimmed().to_string());
    } else {
        lines.push(header);
        lines.push(rule);
    }

    for (idx, scored) in tasks.iter().take(shown).enumerate() {
        let rank = pad(&format!("#{}", idx + 1), 6);
        let score = pad(&format_score(scored.score), 7);
        let name = pad(&truncate_name(&scored.task.name, NAME_WIDTH), NAME_WIDTH + 3);
        let urgency = pad(&scored.task.urgency.to_string(), 9);
        let importance = pad(&scored.task.importance.to_string(), 12);
        let deadline = format_deadline(scored.days_until);

        if use_colors {
            lines.push(format!(
                "{}{}{}{}{}{}",
                rank.dimmed(),
                paint_score(&score, scored.score),
                name,
                urgency,
                importance,
                paint_deadline(&deadline, scored.days_until)
            ));
        } else {
            lines.push(format!(
                "{}{}{}{}{}{}",
                rank, score, name, urgency, importance, deadline
            ));
        }
    }

    if shown < tasks.len() {
        lines.push(format!("... and {} more", tasks.len() - shown));
    }

    lines.join("\n")
}

/// Format a single task with its score breakdown (for `show` and verbose mode)
pub fn format_task_detail(scored: &ScoredTask, use_colors: bool) -> String {
    let task = &scored.task;
    let deadline = match task.deadline {
        Some(date) => format!("{} ({})", date, format_deadline(scored.days_until)),
        None => format_deadline(None),
    };
    let bucket = scored
        .deadline_bucket
        .map_or("no deadline", |b| b.label());

    let mut lines = Vec::new();
    let score = format_score(scored.score);
    if use_colors {
        lines.push(format!("{}  {}", task.name.bold(), paint_score(&score, scored.score)));
    } else {
        lines.push(format!("{}  {}", task.name, score));
    }
    lines.push(format!("  Status: {}", task.status));
    lines.push(format!("  Priority: {}", task.priority));
    lines.push(format!("  Deadline: {}", deadline));
    lines.push("  Breakdown:".to_string());

    for (label, value, weight) in scored.breakdown.contributions() {
        let detail = match label {
            "Deadline" => format!(" ({})", bucket),
            "Effort" => format!(" (effort {})", task.effort),
            _ => String::new(),
        };
        lines.push(format!(
            "    {:<11}{:>4.1} x {:.1} = {:.2}{}",
            label,
            value,
            weight,
            value * weight,
            detail
        ));
    }
    lines.push(format!("    {:<11}{:.2} -> {}", "Total", scored.raw_score, score));

    lines.join("\n")
}

/// Format tasks as tab-separated values for scripting
/// Columns: score, name, deadline, status (no headers, no colors)
pub fn format_tsv(tasks: &[ScoredTask]) -> String {
    tasks
        .iter()
        .map(|scored| {
            let deadline = scored
                .task
                .deadline
                .map(|d| d.to_string())
                .unwrap_or_default();
            format!(
                "{}\t{}\t{}\t{}",
                format_score(scored.score),
                scored.task.name,
                deadline,
                scored.task.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of the fixed formula, printed under the table header
pub fn format_formula() -> String {
    format!(
        "score = urgency x {} + importance x {} + deadline x {} + effort efficiency x {}",
        WEIGHTS.urgency_weight, WEIGHTS.importance_weight, WEIGHTS.deadline_weight, WEIGHTS.effort_weight
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_task;
    use crate::task::{Status, Task};
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn scored(name: &str, urgency: i32, importance: i32, effort: i32, due_in: Option<i64>) -> ScoredTask {
        let mut task = Task::new(name, urgency, importance, effort);
        if let Some(days) = due_in {
            task = task.with_deadline(today() + Duration::days(days));
        }
        score_task(&task, today()).unwrap()
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(9.2), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(8.0), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(6.3), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(4.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(3.9), ScoreBand::Low);
    }

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(9.2), "9.2");
        assert_eq!(format_score(5.0), "5.0");
    }

    #[test]
    fn test_format_deadline_labels() {
        assert_eq!(format_deadline(None), "No deadline");
        assert_eq!(format_deadline(Some(-4)), "OVERDUE");
        assert_eq!(format_deadline(Some(0)), "TODAY");
        assert_eq!(format_deadline(Some(1)), "Tomorrow");
        assert_eq!(format_deadline(Some(12)), "12 days");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short name", 20), "Short name");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("This is a very long task name", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], None, false), "No tasks found.");
    }

    #[test]
    fn test_format_scored_table_rows() {
        let tasks = vec![
            scored("Ship release", 10, 9, 3, Some(1)),
            scored("Plan roadmap", 5, 8, 8, None),
        ];
        let result = format_scored_table(&tasks, None, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Rank"));
        assert!(lines[0].contains("Importance"));
        assert!(lines[2].starts_with("#1"));
        assert!(lines[2].contains("9.2"));
        assert!(lines[2].contains("Ship release"));
        assert!(lines[2].ends_with("Tomorrow"));
        assert!(lines[3].starts_with("#2"));
        assert!(lines[3].ends_with("No deadline"));
    }

    #[test]
    fn test_format_scored_table_top() {
        let tasks = vec![
            scored("a", 9, 9, 1, Some(0)),
            scored("b", 5, 5, 5, None),
            scored("c", 1, 1, 10, None),
        ];
        let result = format_scored_table(&tasks, Some(1), false);
        assert!(result.contains("#1"));
        assert!(!result.contains("#2"));
        assert!(result.ends_with("... and 2 more"));
    }

    #[test]
    fn test_format_scored_table_truncates_names() {
        let long = "A task name that is definitely longer than thirty two characters";
        let tasks = vec![scored(long, 5, 5, 5, None)];
        let result = format_scored_table(&tasks, None, false);
        assert!(result.contains("A task name that is definitel..."));
        assert!(!result.contains(long));
    }

    #[test]
    fn test_format_task_detail() {
        let task = scored("Ship release", 10, 9, 3, Some(1));
        let result = format_task_detail(&task, false);
        assert!(result.starts_with("Ship release  9.2"));
        assert!(result.contains("Status: todo"));
        assert!(result.contains("Priority: medium"));
        assert!(result.contains("Tomorrow"));
        assert!(result.contains("Urgency    10.0 x 0.4 = 4.00"));
        assert!(result.contains("Deadline    9.0 x 0.2 = 1.80 (due tomorrow)"));
        assert!(result.contains("Effort      7.0 x 0.1 = 0.70 (effort 3)"));
        assert!(result.contains("-> 9.2"));
    }

    #[test]
    fn test_format_tsv() {
        let mut task = scored("Ship", 10, 9, 3, Some(1));
        task.task.status = Status::InProgress;
        let tasks = vec![task, scored("Later", 1, 1, 1, None)];
        let result = format_tsv(&tasks);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "9.2\tShip\t2024-06-02\tin_progress");
        assert_eq!(lines[1].split('\t').count(), 4);
        assert!(lines[1].ends_with("\t\ttodo"));
    }

    #[test]
    fn test_format_tsv_limited_to_top() {
        let tasks = vec![
            scored("a", 9, 9, 1, Some(0)),
            scored("b", 5, 5, 5, None),
            scored("c", 1, 1, 10, None),
        ];
        let result = format_tsv(take_top(&tasks, Some(2)));
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\ta\t"));
        assert!(lines[1].contains("\tb\t"));
    }

    #[test]
    fn test_take_top() {
        let tasks = vec![scored("a", 9, 9, 1, None), scored("b", 5, 5, 5, None)];
        assert_eq!(take_top(&tasks, None).len(), 2);
        assert_eq!(take_top(&tasks, Some(1)).len(), 1);
        assert_eq!(take_top(&tasks, Some(10)).len(), 2);
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_formula() {
        assert_eq!(
            format_formula(),
            "score = urgency x 0.4 + importance x 0.3 + deadline x 0.2 + effort efficiency x 0.1"
        );
    }
}
