//! Layout and click routing tests

mod common;

use common::{encoding_index, test_model, test_model_with_text};
use jotpad::commands::Cmd;
use jotpad::geometry::{hit_test, HitTarget, Rect, ToolbarButton, WindowLayout};
use jotpad::messages::{Msg, UiMsg};
use jotpad::model::{AppModel, TextSurface};
use jotpad::update::update;

fn center(rect: Rect) -> (f32, f32) {
    (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

fn button_rect(model: &AppModel, button: ToolbarButton) -> Rect {
    WindowLayout::for_model(model)
        .buttons
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, r)| *r)
        .expect("button in layout")
}

fn click(model: &mut AppModel, (x, y): (f32, f32)) -> Option<Cmd> {
    update(model, Msg::Ui(UiMsg::Click { x, y }))
}

#[test]
fn test_layout_stacks_toolbar_text_status() {
    let model = test_model();
    let layout = WindowLayout::for_model(&model);

    assert_eq!(layout.toolbar.y, 0.0);
    assert_eq!(layout.text_area.y, layout.toolbar.bottom());
    assert_eq!(layout.status_bar.y, layout.text_area.bottom());
    assert_eq!(layout.status_bar.bottom(), 600.0);
    assert!(layout.dropdown_items.is_empty());
}

#[test]
fn test_buttons_in_order_and_do_not_overlap() {
    let model = test_model();
    let layout = WindowLayout::for_model(&model);
    let order: Vec<_> = layout.buttons.iter().map(|(b, _)| *b).collect();
    assert_eq!(order, ToolbarButton::ALL.to_vec());

    for pair in layout.buttons.windows(2) {
        let (_, a) = pair[0];
        let (_, b) = pair[1];
        assert!(a.x + a.width <= b.x);
    }
    let (_, last) = layout.buttons[2];
    assert!(last.x + last.width <= layout.selector.x);
}

#[test]
fn test_click_open_button_shows_dialog() {
    let mut model = test_model();
    let pos = center(button_rect(&model, ToolbarButton::Open));

    assert_eq!(hit_test(&model, pos.0, pos.1), HitTarget::Button(ToolbarButton::Open));
    assert!(matches!(
        click(&mut model, pos),
        Some(Cmd::ShowOpenFileDialog { .. })
    ));
}

#[test]
fn test_click_save_button_without_document_shows_save_dialog() {
    let mut model = test_model();
    let pos = center(button_rect(&model, ToolbarButton::Save));

    assert!(matches!(
        click(&mut model, pos),
        Some(Cmd::ShowSaveFileDialog { .. })
    ));
}

#[test]
fn test_click_close_button_asks_first() {
    let mut model = test_model_with_text("x", 0, 0);
    let pos = center(button_rect(&model, ToolbarButton::Close));

    assert!(matches!(
        click(&mut model, pos),
        Some(Cmd::ShowCloseDialog { .. })
    ));
    assert_eq!(model.surface.text(), "x");
}

#[test]
fn test_selector_opens_dropdown_and_option_selects() {
    let mut model = test_model();
    let selector = WindowLayout::for_model(&model).selector;

    click(&mut model, center(selector));
    assert!(model.encoding.expanded);

    let layout = WindowLayout::for_model(&model);
    assert_eq!(layout.dropdown_items.len(), model.encoding.options().len());

    let gbk = encoding_index(&model, "GBK");
    let row = layout.dropdown_items[gbk];
    assert_eq!(
        hit_test(&model, center(row).0, center(row).1),
        HitTarget::EncodingOption(gbk)
    );

    click(&mut model, center(row));
    assert!(!model.encoding.expanded);
    assert_eq!(model.current_encoding().name(), "GBK");
}

#[test]
fn test_click_outside_dropdown_only_closes_it() {
    let mut model = test_model_with_text("abc\ndef", 0, 0);
    let selector = WindowLayout::for_model(&model).selector;
    click(&mut model, center(selector));
    let before = model.current_encoding();

    // Far left of the text area, away from the dropdown
    let area = WindowLayout::for_model(&model).text_area;
    let cmd = click(&mut model, (area.x + 8.0, area.bottom() - 8.0));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.encoding.expanded);
    assert_eq!(model.current_encoding(), before);
    assert_eq!(model.surface.cursor().line, 0);
}

#[test]
fn test_click_in_text_moves_cursor() {
    let mut model = test_model_with_text("hello\nworld", 0, 0);
    let area = WindowLayout::for_model(&model).text_area;
    let line_height = model.line_height as f32;
    let char_width = model.char_width;

    // Second line, between the 3rd and 4th characters
    let x = area.x + 4.0 + 3.0 * char_width + 1.0;
    let y = area.y + 4.0 + line_height + line_height / 2.0;
    click(&mut model, (x, y));

    let pos = model.surface.cursor();
    assert_eq!((pos.line, pos.column), (1, 3));
    assert_eq!(model.ui.status.position, "Ln 2, Col 4");
}

#[test]
fn test_click_below_last_line_clamps() {
    let mut model = test_model_with_text("one\ntwo", 0, 0);
    let area = WindowLayout::for_model(&model).text_area;

    click(&mut model, (area.x + area.width - 10.0, area.bottom() - 5.0));

    let pos = model.surface.cursor();
    assert_eq!((pos.line, pos.column), (1, 3));
}

#[test]
fn test_status_bar_click_does_nothing() {
    let mut model = test_model_with_text("abc", 0, 1);
    let bar = WindowLayout::for_model(&model).status_bar;

    assert_eq!(click(&mut model, center(bar)), None);
    assert_eq!(model.surface.cursor().column, 1);
}

#[test]
fn test_resize_updates_visible_lines() {
    let mut model = test_model();
    let before = model.viewport.visible_lines;

    update(
        &mut model,
        Msg::App(jotpad::messages::AppMsg::Resize(800, 1200)),
    );

    assert!(model.viewport.visible_lines > before);
}
