//! Keyboard and wheel input translation
//!
//! Keybindings live in the keymap (`src/keymap/`). This file only adapts
//! winit's event types to it and to `ViewMsg::Wheel`.

use winit::event::{ElementState, KeyEvent, MouseScrollDelta};

use jotpad::keymap::{keystroke_from_winit, keystroke_to_msgs, Keymap, Modifiers};
use jotpad::messages::{DocumentMsg, Msg, ViewMsg, WheelInput};

/// Messages produced by one key event
///
/// Releases produce nothing. Keys the keymap cannot represent still type
/// their text, unless a shortcut modifier is held.
pub fn key_event_to_msgs(keymap: &Keymap, event: &KeyEvent, mods: Modifiers) -> Vec<Msg> {
    if event.state != ElementState::Pressed {
        return Vec::new();
    }

    let text = event.text.as_ref().map(|t| t.as_str());
    match keystroke_from_winit(&event.logical_key, event.physical_key, mods) {
        Some(stroke) => keystroke_to_msgs(keymap, stroke, text),
        None if !mods.is_shortcut() => text
            .map(|t| {
                t.chars()
                    .filter(|c| !c.is_control())
                    .map(|c| Msg::Document(DocumentMsg::InsertChar(c)))
                    .collect()
            })
            .unwrap_or_default(),
        None => Vec::new(),
    }
}

/// Wheel delta in lines, positive when scrolling away from the user
///
/// Touchpads report pixels; those are converted using the current line height.
pub fn wheel_delta_lines(delta: &MouseScrollDelta, line_height: usize) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / line_height.max(1) as f64) as f32,
    }
}

/// Wheel message, or None when the delta rounds to nothing
pub fn wheel_msg(delta: &MouseScrollDelta, line_height: usize, mods: Modifiers) -> Option<Msg> {
    let delta_y = wheel_delta_lines(delta, line_height);
    if delta_y == 0.0 {
        return None;
    }
    Some(Msg::View(ViewMsg::Wheel(WheelInput {
        delta_y,
        modifiers: mods,
    })))
}
