use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::view_mode::ViewMode;

/// Configuration from tasktrack.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Static page metadata shown in the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            title: default_title(),
            description: default_description(),
        }
    }
}

fn default_title() -> String {
    "Task Tracker".to_string()
}

fn default_description() -> String {
    "Track your tasks with e-ink display support".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Accepted for compatibility; nothing is translated
    #[serde(default)]
    pub locale: Option<String>,
    /// View selected at startup (overridden by `--view`)
    #[serde(default)]
    pub default_view: ViewMode,
}

/// Base palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Color,
    /// Black on white, no color cues; for e-ink and monochrome displays
    Bw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme color overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-type label colors keyed by type tag, e.g. `sudden_bug_fix = "#FF0000"`
    #[serde(default)]
    pub type_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            theme: ThemeName::Color,
            show_key_hints: true,
            colors: HashMap::new(),
            type_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
