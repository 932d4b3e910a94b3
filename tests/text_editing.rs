//! Text editing tests - insert and delete

mod common;

use common::test_model_with_text;
use jotpad::messages::{DocumentMsg, Msg};
use jotpad::model::TextSurface;
use jotpad::update::update;

fn doc(model: &mut jotpad::AppModel, msg: DocumentMsg) {
    update(model, Msg::Document(msg));
}

// ========================================================================
// InsertChar tests
// ========================================================================

#[test]
fn test_insert_char_at_start() {
    let mut model = test_model_with_text("hello", 0, 0);
    doc(&mut model, DocumentMsg::InsertChar('X'));

    assert_eq!(model.surface.text(), "Xhello");
    assert_eq!(model.surface.cursor().column, 1);
    assert!(model.surface.is_modified);
}

#[test]
fn test_insert_char_at_middle() {
    let mut model = test_model_with_text("hello", 0, 2);
    doc(&mut model, DocumentMsg::InsertChar('X'));

    assert_eq!(model.surface.text(), "heXllo");
    assert_eq!(model.surface.cursor().column, 3);
}

#[test]
fn test_insert_multibyte_char() {
    let mut model = test_model_with_text("ab", 0, 1);
    doc(&mut model, DocumentMsg::InsertChar('中'));

    assert_eq!(model.surface.text(), "a中b");
    assert_eq!(model.surface.cursor().column, 2);
}

#[test]
fn test_insert_char_on_second_line() {
    let mut model = test_model_with_text("hello\nworld", 1, 5);
    doc(&mut model, DocumentMsg::InsertChar('!'));

    assert_eq!(model.surface.text(), "hello\nworld!");
}

// ========================================================================
// InsertNewline / InsertTab tests
// ========================================================================

#[test]
fn test_insert_newline_at_middle() {
    let mut model = test_model_with_text("helloworld", 0, 5);
    doc(&mut model, DocumentMsg::InsertNewline);

    assert_eq!(model.surface.text(), "hello\nworld");
    assert_eq!(model.surface.cursor().line, 1);
    assert_eq!(model.surface.cursor().column, 0);
    assert_eq!(model.ui.status.position, "Ln 2, Col 1");
}

#[test]
fn test_insert_tab_inserts_spaces() {
    let mut model = test_model_with_text("x", 0, 0);
    doc(&mut model, DocumentMsg::InsertTab);

    assert_eq!(model.surface.text(), "    x");
    assert_eq!(model.surface.cursor().column, 4);
}

// ========================================================================
// DeleteBackward tests
// ========================================================================

#[test]
fn test_delete_backward_middle_of_line() {
    let mut model = test_model_with_text("hello", 0, 3);
    doc(&mut model, DocumentMsg::DeleteBackward);

    assert_eq!(model.surface.text(), "helo");
    assert_eq!(model.surface.cursor().column, 2);
}

#[test]
fn test_delete_backward_at_start_of_buffer() {
    let mut model = test_model_with_text("hello", 0, 0);
    doc(&mut model, DocumentMsg::DeleteBackward);

    // Nothing should happen
    assert_eq!(model.surface.text(), "hello");
    assert!(!model.surface.is_modified);
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut model = test_model_with_text("hello\nworld", 1, 0);
    doc(&mut model, DocumentMsg::DeleteBackward);

    assert_eq!(model.surface.text(), "helloworld");
    assert_eq!(model.surface.cursor().line, 0);
    assert_eq!(model.surface.cursor().column, 5); // End of "hello"
}

#[test]
fn test_delete_backward_removes_crlf_as_one() {
    let mut model = test_model_with_text("ab\r\ncd", 1, 0);
    doc(&mut model, DocumentMsg::DeleteBackward);

    assert_eq!(model.surface.text(), "abcd");
}

// ========================================================================
// DeleteForward tests
// ========================================================================

#[test]
fn test_delete_forward_middle_of_line() {
    let mut model = test_model_with_text("hello", 0, 2);
    doc(&mut model, DocumentMsg::DeleteForward);

    assert_eq!(model.surface.text(), "helo");
    assert_eq!(model.surface.cursor().column, 2); // Unchanged
}

#[test]
fn test_delete_forward_at_end_of_line() {
    let mut model = test_model_with_text("hello\nworld", 0, 5);
    doc(&mut model, DocumentMsg::DeleteForward);

    // Deletes the newline, joining lines
    assert_eq!(model.surface.text(), "helloworld");
}

#[test]
fn test_delete_forward_at_end_of_buffer() {
    let mut model = test_model_with_text("hello", 0, 5);
    doc(&mut model, DocumentMsg::DeleteForward);

    assert_eq!(model.surface.text(), "hello");
}

#[test]
fn test_typing_closes_encoding_dropdown() {
    let mut model = test_model_with_text("", 0, 0);
    model.encoding.expanded = true;
    doc(&mut model, DocumentMsg::InsertChar('a'));

    assert!(!model.encoding.expanded);
}
