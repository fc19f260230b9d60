mod schema;

pub use schema::{Config, DEFAULT_EXPORT_PATH, DEFAULT_TASKS_FILE};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/task-scorer/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("task-scorer"))
}

/// Get the default config file path (~/.config/task-scorer/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/task-scorer/config.yaml) and falls back to defaults when it
///   does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.top == Some(0) {
        errors.push("top: must be at least 1".to_string());
    }

    if let Some(ref file) = config.tasks_file {
        if file.trim().is_empty() {
            errors.push("tasks_file: must not be empty".to_string());
        }
    }

    if let Some(ref file) = config.export_path {
        if file.trim().is_empty() {
            errors.push("export_path: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
