//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/jotpad/config.yaml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::encoding::{self, TextEncoding, DEFAULT_ENCODING_LABELS};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id ("light" or "dark", or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Name shown in the window title
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Initial font size in points. `None` leaves the size unset, which disables zoom.
    #[serde(default = "default_font_size")]
    pub font_size: Option<i32>,

    /// Explicit TTF/OTF path; when absent a platform monospace font is searched for
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Directory the open/save dialogs start in
    #[serde(default)]
    pub default_directory: Option<PathBuf>,

    /// File name suggested by the save dialog
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Encoding labels offered by the selector, in display order
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,

    /// Encoding selected at startup
    #[serde(default = "default_encoding")]
    pub default_encoding: String,

    /// Position indicator template; `{line}` and `{column}` are 1-based
    #[serde(default = "default_position_format")]
    pub position_format: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_app_name() -> String {
    "Jotpad".to_string()
}

fn default_font_size() -> Option<i32> {
    Some(12)
}

fn default_file_name() -> String {
    "untitled.txt".to_string()
}

fn default_encodings() -> Vec<String> {
    DEFAULT_ENCODING_LABELS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

fn default_position_format() -> String {
    "Ln {line}, Col {column}".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            app_name: default_app_name(),
            font_size: default_font_size(),
            font_path: None,
            default_directory: None,
            default_file_name: default_file_name(),
            encodings: default_encodings(),
            default_encoding: default_encoding(),
            position_format: default_position_format(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config document; missing keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Encodings for the selector. Falls back to the built-in list if none resolve.
    pub fn encoding_options(&self) -> Vec<TextEncoding> {
        let resolved = encoding::resolve_labels(&self.encodings);
        if resolved.is_empty() {
            tracing::warn!("No usable encodings configured, using built-in list");
            return encoding::resolve_labels(DEFAULT_ENCODING_LABELS);
        }
        resolved
    }

    /// Directory dialogs start in
    pub fn dialog_directory(&self) -> PathBuf {
        self.default_directory
            .clone()
            .unwrap_or_else(crate::config_paths::default_documents_dir)
    }

    /// Path suggested by the save dialog
    pub fn suggested_save_path(&self) -> PathBuf {
        self.dialog_directory().join(&self.default_file_name)
    }
}
