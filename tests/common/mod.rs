//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use jotpad::commands::Cmd;
use jotpad::config::EditorConfig;
use jotpad::messages::{AppMsg, DocumentMsg, Msg};
use jotpad::model::{AppModel, Position, TextSurface};
use jotpad::theme::Theme;
use jotpad::update::update;

/// Create a test model with an empty buffer and default config
pub fn test_model() -> AppModel {
    AppModel::new(EditorConfig::default(), Theme::default(), 800, 600)
}

/// Create a test model with given text and cursor position, no document bound
pub fn test_model_with_text(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = test_model();
    model.surface.set_text(text);
    model.surface.set_cursor(Position::new(line, column));
    model.sync_cursor_decorations();
    model
}

/// Type `text` one character at a time, as the keyboard would
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        let msg = match ch {
            '\n' => DocumentMsg::InsertNewline,
            '\t' => DocumentMsg::InsertTab,
            c => DocumentMsg::InsertChar(c),
        };
        update(model, Msg::Document(msg));
    }
}

pub fn app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    update(model, Msg::App(msg))
}

/// Index of the selector entry named `name`
pub fn encoding_index(model: &AppModel, name: &str) -> usize {
    model
        .encoding
        .options()
        .iter()
        .position(|e| e.name() == name)
        .unwrap_or_else(|| panic!("{} not in encoding list", name))
}
