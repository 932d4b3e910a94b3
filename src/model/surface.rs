//! Text surface - the editable buffer, its cursor and its font size
//!
//! `TextSurface` is the capability the rest of the editor relies on.
//! `TextBuffer` is the rope-backed implementation rendered by the view.

use ropey::Rope;

use super::document::is_line_break;

/// Number of spaces inserted by the Tab key
pub const TAB_SPACES: usize = 4;

/// A 0-based cursor position in chars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Content, cursor and font access for an editable text display
pub trait TextSurface {
    /// Whole buffer as a string
    fn text(&self) -> String;

    /// Replace the whole buffer. The cursor is clamped into the new text.
    fn set_text(&mut self, text: &str);

    fn clear(&mut self) {
        self.set_text("");
    }

    /// Current cursor, 0-based
    fn cursor(&self) -> Position;

    /// Move the cursor, clamping to the buffer
    fn set_cursor(&mut self, pos: Position);

    /// Font point size, `None` when unset
    fn font_point_size(&self) -> Option<i32>;

    fn set_font_point_size(&mut self, size: Option<i32>);

    fn line_count(&self) -> usize;
}

/// Rope-backed text buffer with a single cursor
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: Position,
    /// Column vertical movement tries to return to
    desired_column: Option<usize>,
    font_point_size: Option<i32>,
    /// Set by edits, cleared by loads and saves
    pub is_modified: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(Some(12))
    }
}

impl TextBuffer {
    pub fn new(font_point_size: Option<i32>) -> Self {
        Self {
            rope: Rope::new(),
            cursor: Position::default(),
            desired_column: None,
            font_point_size,
            is_modified: false,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.rope = Rope::from_str(text);
        buffer
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Length of a line in chars, excluding its line break
    pub fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len == 0 || !is_line_break(slice.char(len - 1)) {
            return len;
        }
        if len > 1 && slice.char(len - 1) == '\n' && slice.char(len - 2) == '\r' {
            len - 2
        } else {
            len - 1
        }
    }

    /// Line content without its line break
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let len = self.line_length(line);
        Some(self.rope.line(line).slice(..len).to_string())
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let column = pos.column.min(self.line_length(line));
        Position { line, column }
    }

    fn cursor_char_index(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.column
    }

    fn place_cursor_at_char(&mut self, char_idx: usize) {
        let line = self.rope.char_to_line(char_idx);
        let column = char_idx - self.rope.line_to_char(line);
        self.cursor = Position { line, column };
    }

    // === Editing ===

    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let idx = self.cursor_char_index();
        self.rope.insert(idx, text);
        self.place_cursor_at_char(idx + text.chars().count());
        self.desired_column = None;
        self.is_modified = true;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_text("\n");
    }

    pub fn insert_tab(&mut self) {
        self.insert_text(&" ".repeat(TAB_SPACES));
    }

    /// Delete the char before the cursor, joining with the previous line at column 0
    pub fn delete_backward(&mut self) {
        let idx = self.cursor_char_index();
        if idx == 0 {
            return;
        }
        // Treat CRLF as a single break
        let start = if idx >= 2
            && self.rope.char(idx - 1) == '\n'
            && self.rope.char(idx - 2) == '\r'
        {
            idx - 2
        } else {
            idx - 1
        };
        self.rope.remove(start..idx);
        self.place_cursor_at_char(start);
        self.desired_column = None;
        self.is_modified = true;
    }

    /// Delete the char under the cursor, joining with the next line at end of line
    pub fn delete_forward(&mut self) {
        let idx = self.cursor_char_index();
        let len = self.rope.len_chars();
        if idx >= len {
            return;
        }
        let end = if self.rope.char(idx) == '\r' && idx + 1 < len && self.rope.char(idx + 1) == '\n'
        {
            idx + 2
        } else {
            idx + 1
        };
        self.rope.remove(idx..end);
        self.desired_column = None;
        self.is_modified = true;
    }

    // === Movement ===

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.line_length(self.cursor.line);
        }
        self.desired_column = None;
    }

    pub fn move_right(&mut self) {
        if self.cursor.column < self.line_length(self.cursor.line) {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.rope.len_lines() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.desired_column = None;
    }

    /// Move vertically by `delta` lines, keeping the desired column
    pub fn move_vertical(&mut self, delta: isize) {
        let desired = self.desired_column.unwrap_or(self.cursor.column);
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = (self.cursor.line as isize + delta).clamp(0, last_line as isize) as usize;
        self.cursor = Position {
            line,
            column: desired.min(self.line_length(line)),
        };
        self.desired_column = Some(desired);
    }

    pub fn move_line_start(&mut self) {
        self.cursor.column = 0;
        self.desired_column = None;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.column = self.line_length(self.cursor.line);
        self.desired_column = None;
    }

    pub fn move_document_start(&mut self) {
        self.cursor = Position::default();
        self.desired_column = None;
    }

    pub fn move_document_end(&mut self) {
        let line = self.rope.len_lines().saturating_sub(1);
        self.cursor = Position {
            line,
            column: self.line_length(line),
        };
        self.desired_column = None;
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.clamp(self.cursor);
        self.desired_column = None;
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
        self.desired_column = None;
    }

    fn font_point_size(&self) -> Option<i32> {
        self.font_point_size
    }

    fn set_font_point_size(&mut self, size: Option<i32>) {
        self.font_point_size = size;
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }
}
