//! Default keybindings for the notepad
//!
//! The defaults ship as keymap.yaml at the project root, embedded at compile
//! time. The hardcoded list below is the fallback if that file fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/jotpad/keymap.yaml
///
/// User bindings with `command: Unbound` will remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let Some(user_path) = crate::config_paths::keymap_file() else {
        return bindings;
    };
    if !user_path.exists() {
        return bindings;
    }

    match load_keymap_file(&user_path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                user_path.display(),
                user_bindings.len()
            );
            merge_bindings(bindings, user_bindings)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load user keymap from {}: {}",
                user_path.display(),
                e
            );
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// - If a user binding has the same keystroke → replaces base
/// - If the user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded copy of keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;
    let none = Modifiers::NONE;

    vec![
        // File
        bind(KeyCode::Char('o'), ctrl, Command::OpenFile),
        bind(KeyCode::Char('s'), ctrl, Command::SaveFile),
        bind(KeyCode::Char('w'), ctrl, Command::CloseFile),
        // View
        bind(KeyCode::Char('='), ctrl_shift, Command::ZoomIn),
        bind(KeyCode::Char('-'), ctrl_shift, Command::ZoomOut),
        // Navigation
        bind(KeyCode::Up, none, Command::MoveCursorUp),
        bind(KeyCode::Down, none, Command::MoveCursorDown),
        bind(KeyCode::Left, none, Command::MoveCursorLeft),
        bind(KeyCode::Right, none, Command::MoveCursorRight),
        bind(KeyCode::Home, none, Command::MoveCursorLineStart),
        bind(KeyCode::End, none, Command::MoveCursorLineEnd),
        bind(KeyCode::Home, ctrl, Command::MoveCursorDocumentStart),
        bind(KeyCode::End, ctrl, Command::MoveCursorDocumentEnd),
        bind(KeyCode::PageUp, none, Command::PageUp),
        bind(KeyCode::PageDown, none, Command::PageDown),
        // Editing
        bind(KeyCode::Enter, none, Command::InsertNewline),
        bind(KeyCode::Tab, none, Command::InsertTab),
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_s() -> Keystroke {
        Keystroke::new(KeyCode::Char('s'), Modifiers::CTRL)
    }

    #[test]
    fn test_embedded_yaml_matches_hardcoded_defaults() {
        let embedded = parse_keymap_yaml(DEFAULT_KEYMAP_YAML).unwrap();
        assert_eq!(embedded, default_bindings());
    }

    #[test]
    fn test_merge_empty_user_returns_base() {
        let base = default_bindings();
        let merged = merge_bindings(base.clone(), vec![]);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_overrides_existing() {
        let base = vec![Keybinding::new(ctrl_s(), Command::SaveFile)];
        let user = vec![Keybinding::new(ctrl_s(), Command::OpenFile)];
        let merged = merge_bindings(base, user);
        assert_eq!(merged, vec![Keybinding::new(ctrl_s(), Command::OpenFile)]);
    }

    #[test]
    fn test_merge_adds_new_binding() {
        let base = vec![Keybinding::new(ctrl_s(), Command::SaveFile)];
        let extra = Keystroke::new(KeyCode::Char('q'), Modifiers::CTRL);
        let merged = merge_bindings(base, vec![Keybinding::new(extra, Command::CloseFile)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_unbound_removes_binding() {
        let base = vec![Keybinding::new(ctrl_s(), Command::SaveFile)];
        let user = vec![Keybinding::new(ctrl_s(), Command::Unbound)];
        assert!(merge_bindings(base, user).is_empty());
    }
}
