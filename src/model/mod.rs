//! Application model - the complete state of the notepad
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod status_bar;
pub mod surface;
pub mod ui;

pub use document::{AccessMode, DocumentError, DocumentHandle, OpenDocument, TranscodeReport};
pub use status_bar::{format_position, StatusBar};
pub use surface::{Position, TextBuffer, TextSurface, TAB_SPACES};
pub use ui::{CloseChoice, CloseOrigin, EncodingSelector, LineHighlight, UiState};

use crate::config::EditorConfig;
use crate::encoding::TextEncoding;
use crate::geometry::WindowLayout;
use crate::theme::Theme;

/// Default line height before the renderer reports real font metrics
pub const DEFAULT_LINE_HEIGHT: usize = 20;
/// Default char width before the renderer reports real font metrics
pub const DEFAULT_CHAR_WIDTH: f32 = 10.0;

/// Scroll position and size of the text area, in lines and columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line
    pub top_line: usize,
    /// First visible visual column
    pub left_column: usize,
    pub visible_lines: usize,
    pub visible_columns: usize,
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Buffer, cursor and font size
    pub surface: TextBuffer,
    /// File bound to the window
    pub document: DocumentHandle,
    /// Encoding used for the next read or write
    pub encoding: EncodingSelector,
    /// UI state (status bar, decorations, pending dialogs)
    pub ui: UiState,
    pub viewport: Viewport,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
}

impl AppModel {
    /// Create a model with an empty buffer and no document
    pub fn new(config: EditorConfig, theme: Theme, window_width: u32, window_height: u32) -> Self {
        let initial = TextEncoding::for_label(&config.default_encoding).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown default encoding '{}', using UTF-8",
                config.default_encoding
            );
            TextEncoding::utf8()
        });
        let encoding = EncodingSelector::new(config.encoding_options(), initial);

        let mut model = Self {
            surface: TextBuffer::new(config.font_size),
            document: DocumentHandle::Closed,
            encoding,
            ui: UiState::new(),
            viewport: Viewport::default(),
            config,
            theme,
            window_size: (window_width, window_height),
            line_height: DEFAULT_LINE_HEIGHT,
            char_width: DEFAULT_CHAR_WIDTH,
        };
        model.update_viewport_size();
        model.sync_cursor_decorations();
        model
    }

    /// Window title: `"<path>-<app name>"` with a document, the app name without
    pub fn window_title(&self) -> String {
        match self.document.path() {
            Some(path) => format!("{}-{}", path.display(), self.config.app_name),
            None => self.config.app_name.clone(),
        }
    }

    /// Update viewport dimensions after window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.update_viewport_size();
        self.ensure_cursor_visible();
    }

    /// Apply font metrics measured by the renderer
    pub fn set_metrics(&mut self, line_height: usize, char_width: f32) {
        self.line_height = line_height.max(1);
        self.char_width = char_width;
        self.update_viewport_size();
        self.ensure_cursor_visible();
    }

    fn update_viewport_size(&mut self) {
        let layout = WindowLayout::for_model(self);
        self.viewport.visible_lines = layout.visible_lines(self.line_height as f32).max(1);
        self.viewport.visible_columns = layout.visible_columns(self.char_width).max(1);
    }

    /// Scroll the minimum amount needed to show the cursor
    pub fn ensure_cursor_visible(&mut self) {
        let pos = self.surface.cursor();
        let vp = &mut self.viewport;

        if pos.line < vp.top_line {
            vp.top_line = pos.line;
        } else if pos.line >= vp.top_line + vp.visible_lines {
            vp.top_line = pos.line + 1 - vp.visible_lines;
        }

        let line = self.surface.line_text(pos.line).unwrap_or_default();
        let visual = crate::geometry::char_col_to_visual_col(&line, pos.column);
        if visual < vp.left_column {
            vp.left_column = visual;
        } else if visual >= vp.left_column + vp.visible_columns {
            vp.left_column = visual + 1 - vp.visible_columns;
        }
    }

    /// Scroll vertically by `lines`, clamped to the buffer
    pub fn scroll_lines(&mut self, lines: i32) {
        let max_top = self.surface.line_count().saturating_sub(1);
        let top = self.viewport.top_line as i64 + lines as i64;
        self.viewport.top_line = top.clamp(0, max_top as i64) as usize;
    }

    /// Rebuild the position indicator and move the line highlight to the cursor
    pub fn sync_cursor_decorations(&mut self) {
        let pos = self.surface.cursor();
        self.ui.status.position = format_position(&self.config.position_format, pos);
        self.ui.line_highlight = Some(LineHighlight { line: pos.line });
    }

    /// Load lines into the buffer, cursor at the start, not modified
    pub fn load_lines(&mut self, lines: &[String]) {
        self.surface.set_text(&lines.join("\n"));
        self.surface.set_cursor(Position::default());
        self.surface.is_modified = false;
        self.viewport.top_line = 0;
        self.viewport.left_column = 0;
    }

    /// Current encoding selection
    pub fn current_encoding(&self) -> TextEncoding {
        self.encoding.current()
    }
}
