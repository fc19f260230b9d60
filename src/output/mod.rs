pub mod export;
pub mod formatter;
pub mod stats;

pub use export::{export_results, to_json, ExportReport};
pub use formatter::{
    format_deadline, format_formula, format_score, format_scored_table, format_task_detail,
    format_tsv, should_use_colors, take_top, ScoreBand,
};
pub use stats::{format_statistics, Statistics};
