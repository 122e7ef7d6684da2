/// Configuration for a taskboard session.
/// Read from ~/.config/taskboard/taskboard.json (or platform equivalent).
///
/// Every section is optional; a missing file or a missing key falls back to
/// the built-in defaults (the two-list starter board and the stock field
/// labels).
///
/// Only an absent `board` key yields the starter board. A present `board`
/// section is taken literally: `{"board": {}}` or `{"board": {"lists": []}}`
/// starts with an empty board.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskboardConfig {
    #[serde(default)]
    pub board: BoardSeed,
    #[serde(default)]
    pub form: FieldDefaults,
}

/// Initial board contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    pub lists: Vec<ListSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSeed {
    /// Generated as `list-N` when omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<TaskSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self {
            lists: vec![
                ListSeed {
                    id: Some("list-1".to_string()),
                    title: "To Do".to_string(),
                    tasks: vec![TaskSeed {
                        id: Some("task-1".to_string()),
                        content: "Task 1".to_string(),
                    }],
                },
                ListSeed {
                    id: Some("list-2".to_string()),
                    title: "In Progress".to_string(),
                    tasks: vec![TaskSeed {
                        id: Some("task-2".to_string()),
                        content: "Task 2".to_string(),
                    }],
                },
            ],
        }
    }
}

/// Labels and placeholder options used when a field is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    #[serde(default = "default_text_label")]
    pub text_label: String,
    #[serde(default = "default_dropdown_label")]
    pub dropdown_label: String,
    #[serde(default = "default_radio_label")]
    pub radio_label: String,
    #[serde(default = "default_options")]
    pub options: Vec<String>,
}

fn default_text_label() -> String {
    "Text Field".to_string()
}

fn default_dropdown_label() -> String {
    "Dropdown".to_string()
}

fn default_radio_label() -> String {
    "Radio Button".to_string()
}

fn default_options() -> Vec<String> {
    vec!["Option 1".to_string(), "Option 2".to_string()]
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            text_label: default_text_label(),
            dropdown_label: default_dropdown_label(),
            radio_label: default_radio_label(),
            options: default_options(),
        }
    }
}

/// Default config path: ~/.config/taskboard/taskboard.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskboard")
        .join("taskboard.json")
}

/// Load config from path, reporting IO and parse errors.
pub fn try_load_config(path: &Path) -> Result<TaskboardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load config from path. Returns default if the file doesn't exist or
/// cannot be parsed.
pub fn load_config(path: &Path) -> TaskboardConfig {
    match try_load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "[taskboard.config] No config at {}, using defaults",
                path.display()
            );
            TaskboardConfig::default()
        }
        Err(e) => {
            log::warn!(
                "[taskboard.config] Failed to load config {}: {}",
                path.display(),
                e
            );
            TaskboardConfig::default()
        }
    }
}
