//! Command enum representing all bindable notepad actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg, ViewMsg};

/// All notepad commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement
    // ========================================================================
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorLineStart,
    MoveCursorLineEnd,
    MoveCursorDocumentStart,
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,

    // ========================================================================
    // Text Editing
    // ========================================================================
    InsertNewline,
    /// Insert spaces up to the tab width
    InsertTab,
    /// Backspace
    DeleteBackward,
    /// Delete key
    DeleteForward,

    // ========================================================================
    // File Operations
    // ========================================================================
    OpenFile,
    SaveFile,
    /// Ask Save / Discard / Cancel, then close the document
    CloseFile,

    // ========================================================================
    // View
    // ========================================================================
    ZoomIn,
    ZoomOut,

    // ========================================================================
    // Special
    // ========================================================================
    /// Explicitly unbound - disables a default binding
    Unbound,
}

impl Command {
    /// Convert this command to message(s) for the Elm update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            MoveCursorUp => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Up))],
            MoveCursorDown => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Down))],
            MoveCursorLeft => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Left))],
            MoveCursorRight => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Right))],
            MoveCursorLineStart => vec![Msg::Editor(EditorMsg::MoveCursorLineStart)],
            MoveCursorLineEnd => vec![Msg::Editor(EditorMsg::MoveCursorLineEnd)],
            MoveCursorDocumentStart => vec![Msg::Editor(EditorMsg::MoveCursorDocumentStart)],
            MoveCursorDocumentEnd => vec![Msg::Editor(EditorMsg::MoveCursorDocumentEnd)],
            PageUp => vec![Msg::Editor(EditorMsg::PageUp)],
            PageDown => vec![Msg::Editor(EditorMsg::PageDown)],

            InsertNewline => vec![Msg::Document(DocumentMsg::InsertNewline)],
            InsertTab => vec![Msg::Document(DocumentMsg::InsertTab)],
            DeleteBackward => vec![Msg::Document(DocumentMsg::DeleteBackward)],
            DeleteForward => vec![Msg::Document(DocumentMsg::DeleteForward)],

            OpenFile => vec![Msg::App(AppMsg::OpenFileDialog)],
            SaveFile => vec![Msg::App(AppMsg::SaveFile)],
            CloseFile => vec![Msg::App(AppMsg::RequestClose)],

            ZoomIn => vec![Msg::View(ViewMsg::ZoomIn)],
            ZoomOut => vec![Msg::View(ViewMsg::ZoomOut)],

            Unbound => vec![],
        }
    }
}
