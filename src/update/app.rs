//! App message handlers (file operations, close and exit flows)

use std::path::Path;

use crate::commands::{Cmd, OPEN_FILTERS, SAVE_FILTERS};
use crate::messages::AppMsg;
use crate::model::{
    AppModel, CloseChoice, CloseOrigin, DocumentError, DocumentHandle, OpenDocument, TextSurface,
};

/// Handle app messages (file operations, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::FontMetrics {
            line_height,
            char_width,
        } => {
            model.set_metrics(line_height, char_width);
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFileDialog => Some(Cmd::ShowOpenFileDialog {
            start_dir: model.config.dialog_directory(),
            filters: OPEN_FILTERS,
        }),

        AppMsg::OpenFileDialogResult { path } => match path {
            Some(path) => update_app(model, AppMsg::OpenFile(path)),
            None => {
                tracing::debug!("Open dialog cancelled");
                None
            }
        },

        AppMsg::OpenFile(path) => {
            open_file(model, &path);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            if model.ui.save_dialog_open {
                tracing::debug!("Save dialog already open");
                return None;
            }
            Some(save(model))
        }

        AppMsg::SaveFileAsDialogResult { path } => {
            model.ui.save_dialog_open = false;
            let exit_after = std::mem::take(&mut model.ui.exit_after_save);
            let Some(path) = path else {
                if exit_after {
                    tracing::info!("Save dialog cancelled, staying open");
                }
                return None;
            };

            if save_as(model, &path) && exit_after {
                Some(Cmd::Exit)
            } else {
                Some(Cmd::Redraw)
            }
        }

        AppMsg::SelectEncoding(index) => {
            model.encoding.expanded = false;
            if !model.encoding.select(index) {
                tracing::warn!("Encoding index {} out of range", index);
                return Some(Cmd::Redraw);
            }
            reload_with_current_encoding(model);
            Some(Cmd::Redraw)
        }

        AppMsg::RequestClose => request_close(model, CloseOrigin::Button),

        AppMsg::RequestExit => request_close(model, CloseOrigin::Window),

        AppMsg::CloseDialogResult(choice) => {
            let Some(origin) = model.ui.pending_close.take() else {
                tracing::warn!("Close dialog result {:?} without a pending close", choice);
                return None;
            };
            resolve_close(model, origin, choice)
        }
    }
}

/// Bind the window to `path` and load it with the current encoding
///
/// On failure the window is left with an empty buffer and no document.
fn open_file(model: &mut AppModel, path: &Path) {
    model.surface.clear();
    if let Some(previous) = model.document.close() {
        tracing::debug!("Released {}", previous.display());
    }

    let result = OpenDocument::open(path).and_then(|mut doc| {
        let (lines, report) = doc.read_lines(model.encoding.current())?;
        Ok((doc, lines, report))
    });

    match result {
        Ok((doc, lines, report)) => {
            model.load_lines(&lines);
            let read_only = doc.mode() == crate::model::AccessMode::ReadOnly;
            model.document = DocumentHandle::Open(doc);
            tracing::info!("Opened {}", path.display());

            let mut status = format!("Opened: {}", path.display());
            if read_only {
                status.push_str(" (read-only)");
            }
            if report.had_errors {
                status.push_str(&format!(" (invalid {} replaced)", model.encoding.current()));
            }
            model.ui.set_status(status);
        }
        Err(e) => {
            tracing::error!("File could not be opened: {}", e);
            model.load_lines(&[]);
            model.ui.set_status(format!("Could not open {}", path.display()));
        }
    }
}

/// Re-read the open document after an encoding change
fn reload_with_current_encoding(model: &mut AppModel) {
    let encoding = model.encoding.current();

    // Without a document the buffer is left alone
    let Some(doc) = model.document.as_open_mut() else {
        model.ui.set_status(format!("Encoding: {}", encoding));
        return;
    };

    let result = doc.read_lines(encoding);
    model.surface.clear();
    match result {
        Ok((lines, report)) => {
            model.load_lines(&lines);
            let mut status = format!("Encoding: {}", encoding);
            if report.had_errors {
                status.push_str(" (invalid bytes replaced)");
            }
            model.ui.set_status(status);
        }
        Err(e) => {
            tracing::error!("Re-reading with {} failed: {}", encoding, e);
            model.ui.set_status(format!("Could not read file as {}", encoding));
        }
    }
}

/// Result of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveOutcome {
    Saved,
    /// No document is bound; a path must be chosen first
    NeedsPath,
    Failed,
}

fn write_document(model: &mut AppModel) -> SaveOutcome {
    let text = model.surface.text();
    let encoding = model.encoding.current();
    let Some(doc) = model.document.as_open_mut() else {
        return SaveOutcome::NeedsPath;
    };

    match doc.write_text(&text, encoding) {
        Ok(report) => {
            let path = doc.path().display().to_string();
            model.surface.is_modified = false;
            tracing::info!("Saved {}", path);
            if report.had_errors {
                model
                    .ui
                    .set_status(format!("Saved: {} (some characters not representable in {})", path, encoding));
            } else {
                model.ui.set_status(format!("Saved: {}", path));
            }
            SaveOutcome::Saved
        }
        Err(e @ DocumentError::ReadOnly(_)) => {
            tracing::error!("Save refused: {}", e);
            model.ui.set_status("File is read-only");
            SaveOutcome::Failed
        }
        Err(e) => {
            tracing::error!("Save failed: {}", e);
            model.ui.set_status(format!("Save failed: {}", e));
            SaveOutcome::Failed
        }
    }
}

fn save_dialog(model: &mut AppModel) -> Cmd {
    model.ui.save_dialog_open = true;
    Cmd::ShowSaveFileDialog {
        suggested_path: model.config.suggested_save_path(),
        filters: SAVE_FILTERS,
    }
}

/// Save to the bound document, or ask where to save
fn save(model: &mut AppModel) -> Cmd {
    match write_document(model) {
        SaveOutcome::NeedsPath => save_dialog(model),
        SaveOutcome::Saved | SaveOutcome::Failed => Cmd::Redraw,
    }
}

/// Create `path`, bind it and write the buffer. Returns true on success.
fn save_as(model: &mut AppModel, path: &Path) -> bool {
    match OpenDocument::create(path) {
        Ok(doc) => {
            model.document = DocumentHandle::Open(doc);
            write_document(model) == SaveOutcome::Saved
        }
        Err(e) => {
            tracing::error!("Could not create {}: {}", path.display(), e);
            model.ui.set_status(format!("Could not save to {}", path.display()));
            false
        }
    }
}

/// Empty the buffer and release the document
fn discard(model: &mut AppModel) {
    model.load_lines(&[]);
    if let Some(path) = model.document.close() {
        tracing::info!("Closed {}", path.display());
    }
    model.ui.status.clear_message();
}

fn request_close(model: &mut AppModel, origin: CloseOrigin) -> Option<Cmd> {
    // At most one prompt is outstanding at a time
    if model.ui.awaiting_dialog() {
        tracing::debug!("Ignoring {:?} close request while a dialog is open", origin);
        return None;
    }
    model.encoding.expanded = false;
    model.ui.pending_close = Some(origin);
    let message = match origin {
        CloseOrigin::Button => "Save changes before closing?",
        CloseOrigin::Window => "Save changes before exiting?",
    };
    Some(Cmd::ShowCloseDialog {
        title: model.config.app_name.clone(),
        message: message.to_string(),
    })
}

fn resolve_close(model: &mut AppModel, origin: CloseOrigin, choice: CloseChoice) -> Option<Cmd> {
    match (origin, choice) {
        (_, CloseChoice::Cancel) => None,

        (CloseOrigin::Button, CloseChoice::Save) => Some(save(model)),

        (CloseOrigin::Button, CloseChoice::Discard) => {
            discard(model);
            Some(Cmd::Redraw)
        }

        (CloseOrigin::Window, CloseChoice::Save) => match write_document(model) {
            SaveOutcome::Saved => Some(Cmd::Exit),
            SaveOutcome::NeedsPath => {
                model.ui.exit_after_save = true;
                Some(save_dialog(model))
            }
            SaveOutcome::Failed => Some(Cmd::Redraw),
        },

        (CloseOrigin::Window, CloseChoice::Discard) => {
            discard(model);
            Some(Cmd::Exit)
        }
    }
}
