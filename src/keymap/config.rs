//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let current_platform = get_current_platform();
    let mut bindings = Vec::new();

    for entry in config.bindings {
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = Command::from_str(&entry.command)
            .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "ctrl+shift+=" into a Keystroke
///
/// A trailing `+` names the plus key itself ("ctrl++").
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    let (mod_part, key_part) = match trimmed.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None if trimmed == "+" => ("", "+"),
        None => match trimmed.rsplit_once('+') {
            Some((mods, key)) => (mods, key),
            None => ("", trimmed),
        },
    };

    let mut mods = Modifiers::NONE;
    for part in mod_part.split('+').filter(|p| !p.is_empty()) {
        mods = mods
            | match part.to_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "shift" => Modifiers::SHIFT,
                "alt" | "option" | "opt" => Modifiers::ALT,
                "meta" | "super" | "win" | "cmd" => Modifiers::META,
                other => {
                    return Err(KeymapError::InvalidKey(format!(
                        "Unknown modifier '{}' in binding: {}",
                        other, key_str
                    )))
                }
            };
    }

    let key = parse_key_code(&key_part.to_lowercase())?;
    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),

        "equal" | "equals" => Ok(KeyCode::Char('=')),
        "minus" => Ok(KeyCode::Char('-')),
        "plus" => Ok(KeyCode::Char('+')),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveCursorUp" => Ok(Command::MoveCursorUp),
            "MoveCursorDown" => Ok(Command::MoveCursorDown),
            "MoveCursorLeft" => Ok(Command::MoveCursorLeft),
            "MoveCursorRight" => Ok(Command::MoveCursorRight),
            "MoveCursorLineStart" => Ok(Command::MoveCursorLineStart),
            "MoveCursorLineEnd" => Ok(Command::MoveCursorLineEnd),
            "MoveCursorDocumentStart" => Ok(Command::MoveCursorDocumentStart),
            "MoveCursorDocumentEnd" => Ok(Command::MoveCursorDocumentEnd),
            "PageUp" => Ok(Command::PageUp),
            "PageDown" => Ok(Command::PageDown),

            "InsertNewline" => Ok(Command::InsertNewline),
            "InsertTab" => Ok(Command::InsertTab),
            "DeleteBackward" => Ok(Command::DeleteBackward),
            "DeleteForward" => Ok(Command::DeleteForward),

            "OpenFile" => Ok(Command::OpenFile),
            "SaveFile" => Ok(Command::SaveFile),
            "CloseFile" => Ok(Command::CloseFile),

            "ZoomIn" => Ok(Command::ZoomIn),
            "ZoomOut" => Ok(Command::ZoomOut),

            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
