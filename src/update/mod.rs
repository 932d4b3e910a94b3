//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod ui;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use ui::update_ui;
pub use view::{update_view, wheel_action, WheelAction};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::View(m) => view::update_view(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    model.sync_cursor_decorations();
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
/// Filters out noisy messages like BlinkCursor from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCursor));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = CursorSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&CursorSnapshot::from_model(model)) {
        debug!(target: "cursor", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertChar('x')`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::View(m) => format!("View::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
