//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,message=debug` - scoped filtering
//! - `RUST_LOG=jotpad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/jotpad/logs/jotpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// records at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "jotpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub line: usize,
    pub column: usize,
    pub line_count: usize,
    pub font_size: Option<i32>,
    pub document_open: bool,
}

impl CursorSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        use crate::model::TextSurface;

        let pos = model.surface.cursor();
        Self {
            line: pos.line,
            column: pos.column,
            line_count: model.surface.line_count(),
            font_size: model.surface.font_point_size(),
            document_open: model.document.is_open(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.line, self.column) != (other.line, other.column) {
            changes.push(format!(
                "cursor ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines {} → {}", self.line_count, other.line_count));
        }
        if self.font_size != other.font_size {
            changes.push(format!("font {:?} → {:?}", self.font_size, other.font_size));
        }
        if self.document_open != other.document_open {
            let status = if other.document_open { "opened" } else { "closed" };
            changes.push(format!("document {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(line: usize, column: usize) -> CursorSnapshot {
        CursorSnapshot {
            line,
            column,
            line_count: 1,
            font_size: Some(12),
            document_open: false,
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        assert_eq!(snapshot(0, 0).diff(&snapshot(0, 0)), None);
    }

    #[test]
    fn test_cursor_and_font_changes_reported() {
        let before = snapshot(0, 0);
        let mut after = snapshot(2, 3);
        after.font_size = Some(13);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("(0,0) → (2,3)"));
        assert!(diff.contains("font Some(12) → Some(13)"));
    }
}
