//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::keymap::Modifiers;
use crate::model::CloseChoice;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
}

/// Text editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    InsertChar(char),
    InsertNewline,
    /// Insert spaces up to the tab width
    InsertTab,
    /// Backspace
    DeleteBackward,
    /// Delete key
    DeleteForward,
}

/// One mouse-wheel notch (or trackpad delta) with the modifiers held at the time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical delta in lines; positive scrolls towards the top
    pub delta_y: f32,
    pub modifiers: Modifiers,
}

/// Font size and wheel messages
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMsg {
    ZoomIn,
    ZoomOut,
    /// Wheel over the text area
    Wheel(WheelInput),
}

/// UI-specific messages (status bar, cursor blink, toolbar)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Toggle cursor blink state
    BlinkCursor,
    /// Primary click at window coordinates
    Click { x: f32, y: f32 },
    /// Open or close the encoding dropdown
    ToggleEncodingDropdown,
    CloseEncodingDropdown,
}

/// Application-level messages (file operations, window events)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Renderer measured new font metrics (line height, char width)
    FontMetrics { line_height: usize, char_width: f32 },

    // === File Operations ===
    /// User requested "Open..." (button or Ctrl+O)
    OpenFileDialog,
    /// Open dialog returned a path (or None if cancelled)
    OpenFileDialogResult { path: Option<PathBuf> },
    /// Bind the window to a file and load it
    OpenFile(PathBuf),
    /// Save to the open document, or ask for a path first
    SaveFile,
    /// Save As dialog returned a path (or None if cancelled)
    SaveFileAsDialogResult { path: Option<PathBuf> },
    /// Pick an encoding by selector index and re-read the document
    SelectEncoding(usize),

    // === Closing ===
    /// Close button or Ctrl+W
    RequestClose,
    /// Window close button
    RequestExit,
    /// Answer from the Save / Discard / Cancel prompt
    CloseDialogResult(CloseChoice),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// View messages (zoom, wheel)
    View(ViewMsg),
    /// UI messages (status bar, toolbar)
    Ui(UiMsg),
    /// App messages (files, window)
    App(AppMsg),
}

impl From<EditorMsg> for Msg {
    fn from(msg: EditorMsg) -> Self {
        Msg::Editor(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<ViewMsg> for Msg {
    fn from(msg: ViewMsg) -> Self {
        Msg::View(msg)
    }
}

impl From<UiMsg> for Msg {
    fn from(msg: UiMsg) -> Self {
        Msg::Ui(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
