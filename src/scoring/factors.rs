use chrono::NaiveDate;

/// Deadline score used when a task has no deadline (same as `Later`).
pub const NO_DEADLINE_SCORE: f64 = 1.0;

/// Proximity of a deadline, in whole calendar days from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineBucket {
    Overdue,         // < 0
    Today,           // 0
    Tomorrow,        // 1
    WithinThreeDays, // 2-3
    WithinWeek,      // 4-7
    WithinTwoWeeks,  // 8-14
    WithinMonth,     // 15-30
    Later,           // > 30
}

impl DeadlineBucket {
    pub fn from_days(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => DeadlineBucket::Overdue,
            0 => DeadlineBucket::Today,
            1 => DeadlineBucket::Tomorrow,
            2..=3 => DeadlineBucket::WithinThreeDays,
            4..=7 => DeadlineBucket::WithinWeek,
            8..=14 => DeadlineBucket::WithinTwoWeeks,
            15..=30 => DeadlineBucket::WithinMonth,
            _ => DeadlineBucket::Later,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            DeadlineBucket::Overdue | DeadlineBucket::Today => 10.0,
            DeadlineBucket::Tomorrow => 9.0,
            DeadlineBucket::WithinThreeDays => 8.0,
            DeadlineBucket::WithinWeek => 6.0,
            DeadlineBucket::WithinTwoWeeks => 4.0,
            DeadlineBucket::WithinMonth => 2.0,
            DeadlineBucket::Later => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeadlineBucket::Overdue => "overdue",
            DeadlineBucket::Today => "due today",
            DeadlineBucket::Tomorrow => "due tomorrow",
            DeadlineBucket::WithinThreeDays => "due within 3 days",
            DeadlineBucket::WithinWeek => "due within a week",
            DeadlineBucket::WithinTwoWeeks => "due within 2 weeks",
            DeadlineBucket::WithinMonth => "due within a month",
            DeadlineBucket::Later => "due later than a month",
        }
    }
}

/// Bucket for an optional deadline relative to `today`. `None` means no deadline.
pub fn deadline_bucket(deadline: Option<NaiveDate>, today: NaiveDate) -> Option<DeadlineBucket> {
    deadline.map(|d| DeadlineBucket::from_days((d - today).num_days()))
}

pub fn deadline_score(deadline: Option<NaiveDate>, today: NaiveDate) -> f64 {
    deadline_bucket(deadline, today).map_or(NO_DEADLINE_SCORE, |b| b.score())
}

/// Quick-win bias: lower effort scores higher. Expects effort in 1-10.
pub fn effort_score(effort: i32) -> f64 {
    10.0 - f64::from(effort)
}
