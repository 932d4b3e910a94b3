//! Configurable keyboard mapping system
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to notepad commands
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → Keystroke → Keymap::handle_keystroke() → Command → Vec<Msg>
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults merged with ~/.config/jotpad/keymap.yaml
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{default_bindings, load_default_keymap, merge_bindings};
pub use keymap::{KeyAction, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::{keystroke_from_winit, modifiers_from_winit};

use crate::messages::{DocumentMsg, Msg};

/// Translate a keystroke (plus the text it typed, if any) into messages
///
/// Bound keystrokes run their command. Unbound keystrokes that typed
/// printable text without Ctrl/Meta insert that text.
pub fn keystroke_to_msgs(keymap: &Keymap, keystroke: Keystroke, text: Option<&str>) -> Vec<Msg> {
    if let KeyAction::Execute(command) = keymap.handle_keystroke(keystroke) {
        return command.to_msgs();
    }

    if keystroke.mods.is_shortcut() {
        return Vec::new();
    }

    text.map(|t| {
        t.chars()
            .filter(|c| !c.is_control())
            .map(|c| Msg::Document(DocumentMsg::InsertChar(c)))
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{AppMsg, ViewMsg};

    fn keymap() -> Keymap {
        Keymap::with_bindings(default_bindings())
    }

    #[test]
    fn test_ctrl_o_opens_dialog() {
        let msgs = keystroke_to_msgs(
            &keymap(),
            Keystroke::new(KeyCode::Char('o'), Modifiers::CTRL),
            Some("o"),
        );
        assert_eq!(msgs, vec![Msg::App(AppMsg::OpenFileDialog)]);
    }

    #[test]
    fn test_ctrl_shift_equal_zooms_in() {
        let msgs = keystroke_to_msgs(
            &keymap(),
            Keystroke::new(KeyCode::Char('='), Modifiers::CTRL | Modifiers::SHIFT),
            Some("+"),
        );
        assert_eq!(msgs, vec![Msg::View(ViewMsg::ZoomIn)]);
    }

    #[test]
    fn test_plain_text_inserts() {
        let msgs = keystroke_to_msgs(&keymap(), Keystroke::key(KeyCode::Char('a')), Some("a"));
        assert_eq!(msgs, vec![Msg::Document(DocumentMsg::InsertChar('a'))]);
    }

    #[test]
    fn test_shift_text_inserts_shifted_char() {
        let msgs = keystroke_to_msgs(
            &keymap(),
            Keystroke::new(KeyCode::Char('a'), Modifiers::SHIFT),
            Some("A"),
        );
        assert_eq!(msgs, vec![Msg::Document(DocumentMsg::InsertChar('A'))]);
    }

    #[test]
    fn test_unbound_ctrl_char_does_nothing() {
        let msgs = keystroke_to_msgs(
            &keymap(),
            Keystroke::new(KeyCode::Char('q'), Modifiers::CTRL),
            Some("q"),
        );
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_space_types_a_space() {
        let msgs = keystroke_to_msgs(&keymap(), Keystroke::key(KeyCode::Space), Some(" "));
        assert_eq!(msgs, vec![Msg::Document(DocumentMsg::InsertChar(' '))]);
    }
}
