//! View message handlers (font zoom, mouse wheel)

use crate::commands::Cmd;
use crate::keymap::Modifiers;
use crate::messages::{EditorMsg, ViewMsg, WheelInput};
use crate::model::{AppModel, TextSurface};

use super::editor::update_editor;

/// What a wheel event should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelAction {
    ZoomIn,
    ZoomOut,
    /// Ctrl held but no vertical movement; swallowed
    Consumed,
    /// Pass through as a normal scroll of this many lines (positive = down)
    Scroll(i32),
}

/// Classify a wheel event. Zoom requires exactly Ctrl, nothing else.
pub fn wheel_action(input: WheelInput) -> WheelAction {
    if input.modifiers == Modifiers::CTRL {
        if input.delta_y > 0.0 {
            WheelAction::ZoomIn
        } else if input.delta_y < 0.0 {
            WheelAction::ZoomOut
        } else {
            WheelAction::Consumed
        }
    } else {
        // Wheel up (positive) moves the viewport towards the top
        WheelAction::Scroll((-input.delta_y * 3.0) as i32)
    }
}

/// Change the font size by `delta` points; an unset size stays unset
fn zoom(model: &mut AppModel, delta: i32) -> Option<Cmd> {
    let size = model.surface.font_point_size()?;
    let new_size = size + delta;
    model.surface.set_font_point_size(Some(new_size));
    tracing::debug!("Font size {} → {}", size, new_size);
    Some(Cmd::Redraw)
}

/// Handle view messages (zoom, wheel)
pub fn update_view(model: &mut AppModel, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::ZoomIn => zoom(model, 1),
        ViewMsg::ZoomOut => zoom(model, -1),
        ViewMsg::Wheel(input) => match wheel_action(input) {
            WheelAction::ZoomIn => zoom(model, 1),
            WheelAction::ZoomOut => zoom(model, -1),
            WheelAction::Consumed => None,
            WheelAction::Scroll(lines) => update_editor(model, EditorMsg::Scroll(lines)),
        },
    }
}
