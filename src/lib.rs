//! Weighted priority scoring and ranking for task lists.
//!
//! ```text
//! score = urgency * 0.4 + importance * 0.3 + deadline * 0.2 + (10 - effort) * 0.1
//! ```
//!
//! [`scoring::score_task`] and [`scoring::rank`] are pure functions of the
//! input tasks and an injected `today`; loading, rendering and export live in
//! [`loader`] and [`output`].

pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod scoring;
pub mod task;

pub use error::ScoreError;
pub use scoring::{rank, score_task, ScoredTask};
pub use task::{Priority, Status, Task};
