//! UI message handlers (status bar, cursor blink, toolbar clicks)

use crate::commands::Cmd;
use crate::geometry::{hit_test, HitTarget, ToolbarButton};
use crate::messages::{AppMsg, EditorMsg, UiMsg};
use crate::model::AppModel;

use super::app::update_app;
use super::editor::update_editor;

/// Handle UI messages (status bar, cursor blink, toolbar)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            model.ui.cursor_visible = !model.ui.cursor_visible;
            Some(Cmd::Redraw)
        }

        UiMsg::ToggleEncodingDropdown => {
            model.encoding.expanded = !model.encoding.expanded;
            Some(Cmd::Redraw)
        }

        UiMsg::CloseEncodingDropdown => {
            if !model.encoding.expanded {
                return None;
            }
            model.encoding.expanded = false;
            Some(Cmd::Redraw)
        }

        UiMsg::Click { x, y } => handle_click(model, x, y),
    }
}

fn handle_click(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let target = hit_test(model, x, y);
    tracing::trace!("Click at ({}, {}) → {:?}", x, y, target);

    // Any click outside the open dropdown only dismisses it
    if model.encoding.expanded && !matches!(target, HitTarget::EncodingOption(_)) {
        model.encoding.expanded = false;
        return Some(Cmd::Redraw);
    }

    match target {
        HitTarget::Button(ToolbarButton::Open) => update_app(model, AppMsg::OpenFileDialog),
        HitTarget::Button(ToolbarButton::Save) => update_app(model, AppMsg::SaveFile),
        HitTarget::Button(ToolbarButton::Close) => update_app(model, AppMsg::RequestClose),
        HitTarget::EncodingSelector => update_ui(model, UiMsg::ToggleEncodingDropdown),
        HitTarget::EncodingOption(index) => update_app(model, AppMsg::SelectEncoding(index)),
        HitTarget::TextArea { line, column } => {
            update_editor(model, EditorMsg::SetCursorPosition { line, column })
        }
        HitTarget::StatusBar | HitTarget::Nowhere => None,
    }
}
