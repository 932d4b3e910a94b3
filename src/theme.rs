//! Theme system
//!
//! YAML themes with compile-time embedded built-ins and optional user themes.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/jotpad/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub editor: EditorThemeData,
    pub toolbar: ToolbarThemeData,
    pub status_bar: StatusBarThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub current_line_background: String,
    pub cursor_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarThemeData {
    pub background: String,
    pub foreground: String,
    pub button_background: String,
    pub button_border: String,
    pub dropdown_background: String,
    pub dropdown_selected: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarThemeData {
    pub background: String,
    pub foreground: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub toolbar: ToolbarTheme,
    pub status_bar: StatusBarTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    pub cursor_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarTheme {
    pub background: Color,
    pub foreground: Color,
    pub button_background: Color,
    pub button_border: Color,
    pub dropdown_background: Color,
    pub dropdown_selected: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
}

impl Theme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let builtin = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme: {}", id))?;
        Self::from_yaml(builtin.yaml)
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = data.ui;
        Ok(Self {
            name: data.name,
            editor: EditorTheme {
                background: Color::from_hex(&ui.editor.background)?,
                foreground: Color::from_hex(&ui.editor.foreground)?,
                current_line_background: Color::from_hex(&ui.editor.current_line_background)?,
                cursor_color: Color::from_hex(&ui.editor.cursor_color)?,
            },
            toolbar: ToolbarTheme {
                background: Color::from_hex(&ui.toolbar.background)?,
                foreground: Color::from_hex(&ui.toolbar.foreground)?,
                button_background: Color::from_hex(&ui.toolbar.button_background)?,
                button_border: Color::from_hex(&ui.toolbar.button_border)?,
                dropdown_background: Color::from_hex(&ui.toolbar.dropdown_background)?,
                dropdown_selected: Color::from_hex(&ui.toolbar.dropdown_selected)?,
            },
            status_bar: StatusBarTheme {
                background: Color::from_hex(&ui.status_bar.background)?,
                foreground: Color::from_hex(&ui.status_bar.foreground)?,
            },
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Light".to_string(),
            editor: EditorTheme {
                background: Color::rgb(0xFF, 0xFF, 0xFF),
                foreground: Color::rgb(0x1E, 0x1E, 0x1E),
                current_line_background: Color::rgb(0xFF, 0xFF, 0x00),
                cursor_color: Color::rgb(0x00, 0x00, 0x00),
            },
            toolbar: ToolbarTheme {
                background: Color::rgb(0xEC, 0xEC, 0xEC),
                foreground: Color::rgb(0x20, 0x20, 0x20),
                button_background: Color::rgb(0xFA, 0xFA, 0xFA),
                button_border: Color::rgb(0xA0, 0xA0, 0xA0),
                dropdown_background: Color::rgb(0xFF, 0xFF, 0xFF),
                dropdown_selected: Color::rgb(0xCC, 0xE4, 0xF7),
            },
            status_bar: StatusBarTheme {
                background: Color::rgb(0xE0, 0xE0, 0xE0),
                foreground: Color::rgb(0x30, 0x30, 0x30),
            },
        }
    }
}
