//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// Result of handling a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command
    Execute(Command),
    /// No binding matches this keystroke
    NoMatch,
}

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Keystroke → index into `bindings`; later bindings win
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.insert(binding.keystroke, idx);
        self.bindings.push(binding);
    }

    /// Look up the action for a keystroke
    pub fn handle_keystroke(&self, keystroke: Keystroke) -> KeyAction {
        match self.lookup.get(&keystroke) {
            Some(&idx) if self.bindings[idx].command != Command::Unbound => {
                KeyAction::Execute(self.bindings[idx].command)
            }
            _ => KeyAction::NoMatch,
        }
    }

    /// First keystroke bound to `command`, for display in tooltips
    pub fn keystroke_for(&self, command: Command) -> Option<Keystroke> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.keystroke)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
