pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::{ScoringWeights, WEIGHTS};
pub use factors::{deadline_bucket, deadline_score, effort_score, DeadlineBucket, NO_DEADLINE_SCORE};
pub use engine::{rank, score_task, ScoreBreakdown, ScoredTask};
pub use validation::validate_task;
