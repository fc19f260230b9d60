use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use task_scorer::loader::InvalidTasks;
use task_scorer::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_LOAD: i32 = 1;
const EXIT_INVALID_TASKS: i32 = 2;
const EXIT_EXPORT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tasks sorted by priority (default if no subcommand)
    List {
        /// Only show the N highest-priority tasks
        #[arg(short, long)]
        top: Option<NonZeroUsize>,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show the score breakdown of a task by its rank
    Show {
        /// Rank of the task (1-based, as shown in list)
        index: usize,
    },
    /// Print summary statistics
    Stats,
    /// Write scored tasks as JSON
    Export {
        /// Output path (defaults to scored_tasks.json or the config's export_path)
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "task-scorer")]
#[command(about = "Rank tasks by urgency, importance, deadline and effort", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/task-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Task file to score (defaults to sample_tasks.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Reference date for deadlines (defaults to the local date)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List {
        top: None,
        tsv: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match task_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = task_scorer::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let tasks_path = cli
        .file
        .unwrap_or_else(|| PathBuf::from(config.tasks_file()));

    let tasks = match task_scorer::loader::load_tasks(&tasks_path) {
        Ok(t) => t,
        Err(e) => {
            if let Some(invalid) = e.downcast_ref::<InvalidTasks>() {
                eprintln!("Invalid task data in {}:", tasks_path.display());
                for error in &invalid.0 {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INVALID_TASKS);
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_LOAD);
        }
    };

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, count = tasks.len(), "scoring tasks");

    let ranked = match task_scorer::rank(&tasks, today) {
        Ok(r) => r,
        Err(errors) => {
            eprintln!("Invalid task data in {}:", tasks_path.display());
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_INVALID_TASKS);
        }
    };

    let use_colors = !cli.no_color && output::should_use_colors();

    match command {
        Commands::List { top, tsv } => {
            let top = top.map(NonZeroUsize::get).or(config.top);
            if tsv {
                println!("{}", output::format_tsv(output::take_top(&ranked, top)));
            } else {
                println!("{}", output::format_scored_table(&ranked, top, use_colors));

                if cli.verbose && !ranked.is_empty() {
                    println!();
                    for scored in output::take_top(&ranked, top) {
                        println!("{}", output::format_task_detail(scored, use_colors));
                        println!();
                    }
                    let formula = output::format_formula();
                    if use_colors {
                        println!("{}", formula.dimmed());
                    } else {
                        println!("{}", formula);
                    }
                }
            }
        }
        Commands::Show { index } => {
            // Validate index bounds (1-based)
            if index < 1 || index > ranked.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    ranked.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            println!("{}", output::format_task_detail(&ranked[index - 1], use_colors));
        }
        Commands::Stats => match output::Statistics::from_scored(&ranked) {
            Some(stats) => println!("{}", output::format_statistics(&stats, use_colors)),
            None => println!("No tasks to analyze."),
        },
        Commands::Export { output: path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(config.export_path()));
            if let Err(e) = output::export_results(&path, &ranked, Utc::now()) {
                eprintln!("Export failed: {:#}", e);
                std::process::exit(EXIT_EXPORT);
            }
            println!("Exported {} tasks to {}", ranked.len(), path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_top_must_be_positive() {
        assert!(Cli::try_parse_from(["task-scorer", "list", "--top", "0"]).is_err());
    }

    #[test]
    fn test_list_top_and_tsv_together() {
        let cli = Cli::try_parse_from(["task-scorer", "list", "--tsv", "--top", "2"]).unwrap();
        match cli.command {
            Some(Commands::List { top, tsv }) => {
                assert_eq!(top.map(NonZeroUsize::get), Some(2));
                assert!(tsv);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_today_flag_parses_iso_date() {
        let cli = Cli::try_parse_from(["task-scorer", "--today", "2026-10-18", "stats"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 10, 18));
    }
}
