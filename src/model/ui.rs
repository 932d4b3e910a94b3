//! UI state - decorations, the encoding selector and dialog bookkeeping

use super::status_bar::StatusBar;
use crate::encoding::TextEncoding;

/// Full-row background decoration on the cursor's line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHighlight {
    pub line: usize,
}

/// Where a close confirmation was requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOrigin {
    /// Close button or Ctrl+W: the window stays open afterwards
    Button,
    /// Window close button: the process exits unless cancelled
    Window,
}

/// Answer to the Save / Discard / Cancel prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// Closed list of encodings with exactly one selected
#[derive(Debug, Clone)]
pub struct EncodingSelector {
    options: Vec<TextEncoding>,
    selected: usize,
    /// Dropdown list visible
    pub expanded: bool,
}

impl EncodingSelector {
    /// Build a selector; an empty list falls back to UTF-8 only
    pub fn new(options: Vec<TextEncoding>, initial: TextEncoding) -> Self {
        let options = if options.is_empty() {
            vec![TextEncoding::utf8()]
        } else {
            options
        };
        let selected = options.iter().position(|e| *e == initial).unwrap_or(0);
        Self {
            options,
            selected,
            expanded: false,
        }
    }

    pub fn options(&self) -> &[TextEncoding] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> TextEncoding {
        self.options[self.selected]
    }

    /// Select by index. Returns false if the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn index_of(&self, encoding: TextEncoding) -> Option<usize> {
        self.options.iter().position(|e| *e == encoding)
    }
}

/// Transient UI state not owned by the text surface
#[derive(Debug, Clone)]
pub struct UiState {
    pub status: StatusBar,
    /// Current-line decoration, replaced on each cursor move
    pub line_highlight: Option<LineHighlight>,
    /// Caret blink phase
    pub cursor_visible: bool,
    /// Close prompt currently on screen
    pub pending_close: Option<CloseOrigin>,
    /// Save-as dialog currently on screen
    pub save_dialog_open: bool,
    /// Exit once the pending save-as completes
    pub exit_after_save: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBar::default(),
            line_highlight: None,
            cursor_visible: true,
            pending_close: None,
            save_dialog_open: false,
            exit_after_save: false,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a close prompt or save-as dialog awaits an answer
    pub fn awaiting_dialog(&self) -> bool {
        self.pending_close.is_some() || self.save_dialog_open
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.set_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<TextEncoding> {
        ["utf-8", "gbk", "big5"]
            .iter()
            .filter_map(|l| TextEncoding::for_label(l))
            .collect()
    }

    #[test]
    fn test_selector_starts_on_initial() {
        let gbk = TextEncoding::for_label("gbk").unwrap();
        let selector = EncodingSelector::new(options(), gbk);
        assert_eq!(selector.selected_index(), 1);
        assert_eq!(selector.current(), gbk);
    }

    #[test]
    fn test_selector_unknown_initial_falls_back_to_first() {
        let sjis = TextEncoding::for_label("shift_jis").unwrap();
        let selector = EncodingSelector::new(options(), sjis);
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut selector = EncodingSelector::new(options(), TextEncoding::utf8());
        assert!(!selector.select(3));
        assert_eq!(selector.selected_index(), 0);
        assert!(selector.select(2));
        assert_eq!(selector.current().name(), "Big5");
    }

    #[test]
    fn test_empty_selector_has_utf8() {
        let selector = EncodingSelector::new(Vec::new(), TextEncoding::utf8());
        assert_eq!(selector.options().len(), 1);
        assert_eq!(selector.current(), TextEncoding::utf8());
    }
}
