use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Time window selecting which tasks are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Open tasks plus tasks closed today
    #[default]
    Today,
    /// Tasks closed yesterday
    Yesterday,
    /// Tasks created or closed in the current Sunday-to-Saturday week
    Week,
    /// No time filter
    All,
}

impl ViewMode {
    /// The modes that get a tab, in tab order
    pub const TABS: [ViewMode; 3] = [ViewMode::Today, ViewMode::Yesterday, ViewMode::Week];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Today => "Today",
            ViewMode::Yesterday => "Yesterday",
            ViewMode::Week => "This Week",
            ViewMode::All => "All",
        }
    }

    /// Next tab (wraps). `All` has no tab and moves to the first one.
    pub fn next_tab(self) -> ViewMode {
        match self {
            ViewMode::Today => ViewMode::Yesterday,
            ViewMode::Yesterday => ViewMode::Week,
            ViewMode::Week | ViewMode::All => ViewMode::Today,
        }
    }

    /// Previous tab (wraps). `All` moves to the last tab.
    pub fn prev_tab(self) -> ViewMode {
        match self {
            ViewMode::Today | ViewMode::All => ViewMode::Week,
            ViewMode::Yesterday => ViewMode::Today,
            ViewMode::Week => ViewMode::Yesterday,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Today => write!(f, "today"),
            ViewMode::Yesterday => write!(f, "yesterday"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}' (expected today, yesterday, week or all)")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(ViewMode::Today),
            "yesterday" => Ok(ViewMode::Yesterday),
            "week" | "this-week" | "this_week" => Ok(ViewMode::Week),
            "all" => Ok(ViewMode::All),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
