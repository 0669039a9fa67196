use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{TaskStatus, TaskType, ThemeName, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    /// Per-type label colors
    pub type_colors: HashMap<TaskType, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut type_colors = HashMap::new();
        type_colors.insert(TaskType::SuddenBugFix, Color::Rgb(0xFF, 0x44, 0x44));
        type_colors.insert(TaskType::PlannedFeature, Color::Rgb(0x44, 0x88, 0xFF));
        type_colors.insert(TaskType::BackgroundTask, Color::Rgb(0x7D, 0x78, 0xBF));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            type_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Black on white with no hue cues. Meant for e-ink panels.
    pub fn monochrome() -> Self {
        let black = Color::Rgb(0x00, 0x00, 0x00);
        let white = Color::Rgb(0xFF, 0xFF, 0xFF);
        let grey = Color::Rgb(0x66, 0x66, 0x66);
        let light = Color::Rgb(0xDD, 0xDD, 0xDD);

        let type_colors = TaskType::ALL.into_iter().map(|t| (t, black)).collect();
        Theme {
            background: white,
            text: black,
            text_bright: black,
            highlight: black,
            dim: grey,
            red: black,
            yellow: black,
            green: black,
            purple: black,
            selection_bg: light,
            selection_border: black,
            search_match_bg: black,
            search_match_fg: white,
            type_colors,
        }
    }

    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = match ui.theme {
            ThemeName::Color => Theme::default(),
            ThemeName::Bw => Theme::monochrome(),
        };

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "purple" => theme.purple = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                "search_match_bg" => theme.search_match_bg = color,
                "search_match_fg" => theme.search_match_fg = color,
                _ => tracing::warn!(key = %key, "ignoring unknown color key"),
            }
        }

        // Apply type color overrides from [ui.type_colors]
        for (tag, value) in &ui.type_colors {
            if let (Some(task_type), Some(color)) = (TaskType::from_tag(tag), parse_hex_color(value)) {
                theme.type_colors.insert(task_type, color);
            }
        }

        theme
    }

    /// Label color for a task type
    pub fn type_color(&self, task_type: TaskType) -> Color {
        self.type_colors.get(&task_type).copied().unwrap_or(self.text)
    }

    /// Color of the status label on a card
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Open => self.green,
            TaskStatus::Closed => self.dim,
        }
    }
}
