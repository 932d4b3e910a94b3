//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// A named extension filter for the native file dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered by the open dialog
pub const OPEN_FILTERS: &[FileFilter] = &[FileFilter {
    name: "Text",
    extensions: &["txt"],
}];

/// Filters offered by the save dialog
pub const SAVE_FILTERS: &[FileFilter] = &[FileFilter {
    name: "Text",
    extensions: &["txt", "doc"],
}];

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Request a full redraw of the UI
    Redraw,

    // File dialogs
    /// Show native open file dialog
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: PathBuf,
        filters: &'static [FileFilter],
    },
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: PathBuf,
        filters: &'static [FileFilter],
    },
    /// Ask Save / Discard / Cancel; answered with `AppMsg::CloseDialogResult`
    ShowCloseDialog { title: String, message: String },

    // === Application Commands ===
    /// Request application exit
    Exit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_redraw_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Exit.needs_redraw());
    }

    #[test]
    fn test_save_filters_include_doc() {
        assert!(SAVE_FILTERS[0].extensions.contains(&"doc"));
        assert_eq!(OPEN_FILTERS[0].extensions, &["txt"]);
    }
}
