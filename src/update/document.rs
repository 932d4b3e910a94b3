//! Document message handlers (text editing)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => model.surface.insert_char(ch),
        DocumentMsg::InsertNewline => model.surface.insert_newline(),
        DocumentMsg::InsertTab => model.surface.insert_tab(),
        DocumentMsg::DeleteBackward => model.surface.delete_backward(),
        DocumentMsg::DeleteForward => model.surface.delete_forward(),
    }

    model.encoding.expanded = false;
    model.ensure_cursor_visible();
    model.ui.cursor_visible = true;
    Some(Cmd::Redraw)
}
