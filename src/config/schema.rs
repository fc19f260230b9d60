use serde::{Deserialize, Serialize};

/// CLI defaults read from `~/.config/task-scorer/config.yaml`.
///
/// Example YAML:
/// ```yaml
/// tasks_file: ~/notes/tasks.json
/// top: 10
/// export_path: scored_tasks.json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Task file used when `--file` is not given
    #[serde(default)]
    pub tasks_file: Option<String>,

    /// Default row limit for `list`
    #[serde(default)]
    pub top: Option<usize>,

    /// Default target for `export`
    #[serde(default)]
    pub export_path: Option<String>,
}

pub const DEFAULT_TASKS_FILE: &str = "sample_tasks.json";
pub const DEFAULT_EXPORT_PATH: &str = "scored_tasks.json";

impl Config {
    pub fn tasks_file(&self) -> &str {
        self.tasks_file.as_deref().unwrap_or(DEFAULT_TASKS_FILE)
    }

    pub fn export_path(&self) -> &str {
        self.export_path.as_deref().unwrap_or(DEFAULT_EXPORT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tasks_file(), "sample_tasks.json");
        assert_eq!(config.export_path(), "scored_tasks.json");
        assert!(config.top.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
tasks_file: "work/tasks.json"
top: 5
export_path: "out/scored.json"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.tasks_file(), "work/tasks.json");
        assert_eq!(config.top, Some(5));
        assert_eq!(config.export_path(), "out/scored.json");
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "urgency_weight: 0.5\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            tasks_file: Some("tasks.json".to_string()),
            top: Some(3),
            export_path: None,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
