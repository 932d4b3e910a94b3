//! Editor message handlers (cursor movement, viewport scrolling)

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::{AppModel, Position, TextSurface};

/// Handle editor messages (cursor movement, scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            match direction {
                Direction::Up => model.surface.move_vertical(-1),
                Direction::Down => model.surface.move_vertical(1),
                Direction::Left => model.surface.move_left(),
                Direction::Right => model.surface.move_right(),
            }
            after_cursor_move(model)
        }

        EditorMsg::MoveCursorLineStart => {
            model.surface.move_line_start();
            after_cursor_move(model)
        }

        EditorMsg::MoveCursorLineEnd => {
            model.surface.move_line_end();
            after_cursor_move(model)
        }

        EditorMsg::MoveCursorDocumentStart => {
            model.surface.move_document_start();
            after_cursor_move(model)
        }

        EditorMsg::MoveCursorDocumentEnd => {
            model.surface.move_document_end();
            after_cursor_move(model)
        }

        EditorMsg::PageUp => {
            let jump = model.viewport.visible_lines.saturating_sub(2).max(1);
            model.surface.move_vertical(-(jump as isize));
            model.viewport.top_line = model.viewport.top_line.saturating_sub(jump);
            after_cursor_move(model)
        }

        EditorMsg::PageDown => {
            let jump = model.viewport.visible_lines.saturating_sub(2).max(1);
            model.surface.move_vertical(jump as isize);
            model.scroll_lines(jump as i32);
            after_cursor_move(model)
        }

        EditorMsg::SetCursorPosition { line, column } => {
            model.surface.set_cursor(Position::new(line, column));
            after_cursor_move(model)
        }

        EditorMsg::Scroll(delta) => {
            let before = model.viewport.top_line;
            model.scroll_lines(delta);
            (model.viewport.top_line != before).then_some(Cmd::Redraw)
        }
    }
}

fn after_cursor_move(model: &mut AppModel) -> Option<Cmd> {
    model.ensure_cursor_visible();
    model.ui.cursor_visible = true;
    Some(Cmd::Redraw)
}
