//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding mapping a keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }

    /// Get display string for this keybinding, e.g. "Ctrl+S"
    pub fn display_string(&self) -> String {
        self.keystroke.to_string()
    }
}
