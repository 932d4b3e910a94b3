//! Position indicator and current-line highlight tests

mod common;

use common::{test_model, test_model_with_text, type_text};
use jotpad::config::EditorConfig;
use jotpad::messages::{AppMsg, Direction, EditorMsg, Msg};
use jotpad::model::{AppModel, LineHighlight, TextSurface};
use jotpad::theme::Theme;
use jotpad::update::update;

fn editor(model: &mut AppModel, msg: EditorMsg) {
    update(model, Msg::Editor(msg));
}

#[test]
fn test_indicator_tracks_arrow_keys() {
    let mut model = test_model_with_text("abc\ndef\nghi", 0, 0);

    editor(&mut model, EditorMsg::MoveCursor(Direction::Down));
    editor(&mut model, EditorMsg::MoveCursor(Direction::Right));
    editor(&mut model, EditorMsg::MoveCursor(Direction::Right));

    assert_eq!(model.ui.status.position, "Ln 2, Col 3");
    assert_eq!(model.ui.line_highlight, Some(LineHighlight { line: 1 }));
}

#[test]
fn test_indicator_tracks_typing() {
    let mut model = test_model();
    type_text(&mut model, "hello\nwo");

    assert_eq!(model.ui.status.position, "Ln 2, Col 3");
    assert_eq!(model.ui.line_highlight, Some(LineHighlight { line: 1 }));
}

#[test]
fn test_exactly_one_highlight_follows_cursor() {
    let mut model = test_model_with_text("a\nb\nc\nd", 0, 0);

    editor(&mut model, EditorMsg::MoveCursorDocumentEnd);
    assert_eq!(model.ui.line_highlight, Some(LineHighlight { line: 3 }));

    editor(&mut model, EditorMsg::MoveCursorDocumentStart);
    assert_eq!(model.ui.line_highlight, Some(LineHighlight { line: 0 }));
}

#[test]
fn test_set_cursor_position_clamps() {
    let mut model = test_model_with_text("short\nline", 0, 0);

    editor(
        &mut model,
        EditorMsg::SetCursorPosition {
            line: 50,
            column: 50,
        },
    );

    let pos = model.surface.cursor();
    assert_eq!((pos.line, pos.column), (1, 4));
    assert_eq!(model.ui.status.position, "Ln 2, Col 5");
}

#[test]
fn test_custom_position_template() {
    let config = EditorConfig {
        position_format: "{line}:{column}".to_string(),
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(config, Theme::default(), 800, 600);
    type_text(&mut model, "ab\nc");

    assert_eq!(model.ui.status.position, "2:2");
}

#[test]
fn test_line_start_and_end() {
    let mut model = test_model_with_text("hello world", 0, 5);

    editor(&mut model, EditorMsg::MoveCursorLineEnd);
    assert_eq!(model.ui.status.position, "Ln 1, Col 12");

    editor(&mut model, EditorMsg::MoveCursorLineStart);
    assert_eq!(model.ui.status.position, "Ln 1, Col 1");
}

#[test]
fn test_page_down_keeps_cursor_visible() {
    let text: String = (0..200).map(|i| format!("{}\n", i)).collect();
    let mut model = test_model_with_text(&text, 0, 0);

    editor(&mut model, EditorMsg::PageDown);
    editor(&mut model, EditorMsg::PageDown);

    let line = model.surface.cursor().line;
    let vp = model.viewport;
    assert!(line > 0);
    assert!(vp.top_line <= line && line < vp.top_line + vp.visible_lines);
}

#[test]
fn test_lone_cr_file_reports_real_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mac.txt");
    std::fs::write(&path, b"ab\rcd").unwrap();

    let mut model = test_model();
    update(&mut model, Msg::App(AppMsg::OpenFile(path)));
    editor(&mut model, EditorMsg::MoveCursorLineEnd);

    assert_eq!(model.surface.text(), "ab\ncd");
    assert_eq!(model.surface.line_count(), 2);
    assert_eq!(model.ui.status.position, "Ln 1, Col 3");

    editor(&mut model, EditorMsg::MoveCursor(Direction::Right));
    assert_eq!(model.ui.status.position, "Ln 2, Col 1");
}
