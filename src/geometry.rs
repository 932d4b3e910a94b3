//! Window layout and hit-testing
//!
//! Single source of truth for where the toolbar, text area, status bar and
//! encoding dropdown sit. Shared by the renderer and the mouse handling in
//! the runtime. Everything here is pure and testable without a window.

use std::borrow::Cow;

use crate::model::AppModel;

// ============================================================================
// Layout Constants
// ============================================================================

/// Visual width of a tab character
pub const TABULATOR_WIDTH: usize = 4;
/// Padding around toolbar contents (pixels)
pub const TOOLBAR_PADDING_PX: f32 = 6.0;
/// Horizontal padding inside a button (pixels)
pub const BUTTON_PADDING_X_PX: f32 = 10.0;
/// Gap between toolbar buttons (pixels)
pub const BUTTON_GAP_PX: f32 = 6.0;
/// Padding between the text area edge and text (pixels)
pub const TEXT_AREA_PADDING_PX: f32 = 4.0;
/// Extra vertical space in the status bar (pixels)
pub const STATUS_BAR_PADDING_PX: f32 = 6.0;
/// Extra vertical space in each dropdown row (pixels)
pub const DROPDOWN_ROW_PADDING_PX: f32 = 4.0;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Toolbar buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarButton {
    Open,
    Save,
    Close,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 3] = [ToolbarButton::Open, ToolbarButton::Save, ToolbarButton::Close];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarButton::Open => "Open",
            ToolbarButton::Save => "Save",
            ToolbarButton::Close => "Close",
        }
    }
}

/// What lies under a pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Button(ToolbarButton),
    EncodingSelector,
    EncodingOption(usize),
    TextArea { line: usize, column: usize },
    StatusBar,
    Nowhere,
}

/// Computed rectangles for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    pub toolbar: Rect,
    pub buttons: Vec<(ToolbarButton, Rect)>,
    pub selector: Rect,
    pub text_area: Rect,
    pub status_bar: Rect,
    /// One rect per encoding option; empty unless the dropdown is expanded
    pub dropdown_items: Vec<Rect>,
}

impl WindowLayout {
    /// Compute the layout for a window size and font metrics
    ///
    /// `option_labels` are the selector entries; they size the selector and,
    /// when `expanded`, produce the dropdown rows.
    pub fn compute(
        width: f32,
        height: f32,
        line_height: f32,
        char_width: f32,
        option_labels: &[&str],
        expanded: bool,
    ) -> Self {
        let toolbar_height = line_height + TOOLBAR_PADDING_PX * 2.0;
        let toolbar = Rect::new(0.0, 0.0, width, toolbar_height);

        let button_height = line_height + TOOLBAR_PADDING_PX;
        let button_y = (toolbar_height - button_height) / 2.0;
        let mut x = TOOLBAR_PADDING_PX;
        let buttons = ToolbarButton::ALL
            .iter()
            .map(|&button| {
                let w = button.label().chars().count() as f32 * char_width
                    + BUTTON_PADDING_X_PX * 2.0;
                let rect = Rect::new(x, button_y, w, button_height);
                x += w + BUTTON_GAP_PX;
                (button, rect)
            })
            .collect();

        // Widest label plus room for the dropdown arrow
        let widest = option_labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(5);
        let selector_w = (widest + 2) as f32 * char_width + BUTTON_PADDING_X_PX * 2.0;
        let selector = Rect::new(
            (width - selector_w - TOOLBAR_PADDING_PX).max(x),
            button_y,
            selector_w,
            button_height,
        );

        let status_height = line_height + STATUS_BAR_PADDING_PX;
        let status_bar = Rect::new(0.0, (height - status_height).max(toolbar_height), width, status_height);

        let text_area = Rect::new(
            0.0,
            toolbar_height,
            width,
            (status_bar.y - toolbar_height).max(0.0),
        );

        let dropdown_items = if expanded {
            let row_h = line_height + DROPDOWN_ROW_PADDING_PX;
            (0..option_labels.len())
                .map(|i| {
                    Rect::new(
                        selector.x,
                        toolbar.bottom() + i as f32 * row_h,
                        selector.width,
                        row_h,
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            toolbar,
            buttons,
            selector,
            text_area,
            status_bar,
            dropdown_items,
        }
    }

    /// Layout for the current model state
    pub fn for_model(model: &AppModel) -> Self {
        let labels: Vec<&str> = model.encoding.options().iter().map(|e| e.name()).collect();
        Self::compute(
            model.window_size.0 as f32,
            model.window_size.1 as f32,
            model.line_height as f32,
            model.char_width,
            &labels,
            model.encoding.expanded,
        )
    }

    /// Number of whole text lines that fit in the text area
    pub fn visible_lines(&self, line_height: f32) -> usize {
        if line_height <= 0.0 {
            return 0;
        }
        ((self.text_area.height - TEXT_AREA_PADDING_PX * 2.0).max(0.0) / line_height).floor()
            as usize
    }

    /// Number of whole columns that fit in the text area
    pub fn visible_columns(&self, char_width: f32) -> usize {
        if char_width <= 0.0 {
            return 0;
        }
        ((self.text_area.width - TEXT_AREA_PADDING_PX * 2.0).max(0.0) / char_width).floor()
            as usize
    }
}

/// Resolve a pointer position to a UI element
///
/// The dropdown overlays the text area, so it is checked first.
pub fn hit_test(model: &AppModel, x: f32, y: f32) -> HitTarget {
    let layout = WindowLayout::for_model(model);

    if let Some(idx) = layout.dropdown_items.iter().position(|r| r.contains(x, y)) {
        return HitTarget::EncodingOption(idx);
    }
    if layout.selector.contains(x, y) {
        return HitTarget::EncodingSelector;
    }
    if let Some((button, _)) = layout.buttons.iter().find(|(_, r)| r.contains(x, y)) {
        return HitTarget::Button(*button);
    }
    if layout.status_bar.contains(x, y) {
        return HitTarget::StatusBar;
    }
    if layout.text_area.contains(x, y) {
        let (line, column) = pixel_to_cursor(model, &layout, x, y);
        return HitTarget::TextArea { line, column };
    }
    HitTarget::Nowhere
}

/// Convert a point in the text area to a (line, char column) pair, clamped to the buffer
pub fn pixel_to_cursor(model: &AppModel, layout: &WindowLayout, x: f32, y: f32) -> (usize, usize) {
    let line_height = model.line_height.max(1) as f32;
    let char_width = if model.char_width > 0.0 {
        model.char_width
    } else {
        1.0
    };

    let rel_y = (y - layout.text_area.y - TEXT_AREA_PADDING_PX).max(0.0);
    let rel_x = (x - layout.text_area.x - TEXT_AREA_PADDING_PX).max(0.0);

    let last_line = model.surface.rope().len_lines().saturating_sub(1);
    let line = (model.viewport.top_line + (rel_y / line_height) as usize).min(last_line);

    let visual_col = model.viewport.left_column + (rel_x / char_width).round() as usize;
    let text = model.surface.line_text(line).unwrap_or_default();
    let column = visual_col_to_char_col(&text, visual_col);

    (line, column)
}

// ============================================================================
// Tab Expansion Helpers
// ============================================================================

/// Expand tab characters to spaces for display.
///
/// Returns `Cow::Borrowed` if no tabs are present.
pub fn expand_tabs_for_display(text: &str) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() * 2);
    let mut visual_col = 0;

    for ch in text.chars() {
        if ch == '\t' {
            let spaces = TABULATOR_WIDTH - (visual_col % TABULATOR_WIDTH);
            result.extend(std::iter::repeat(' ').take(spaces));
            visual_col += spaces;
        } else {
            result.push(ch);
            visual_col += 1;
        }
    }

    Cow::Owned(result)
}

/// Convert a character column index to a visual (screen) column position.
pub fn char_col_to_visual_col(text: &str, char_col: usize) -> usize {
    let mut visual_col = 0;
    for (i, ch) in text.chars().enumerate() {
        if i >= char_col {
            break;
        }
        if ch == '\t' {
            visual_col += TABULATOR_WIDTH - (visual_col % TABULATOR_WIDTH);
        } else {
            visual_col += 1;
        }
    }
    visual_col
}

/// Convert a visual (screen) column position to a character column index.
///
/// Past the end of the line, returns the line length.
pub fn visual_col_to_char_col(text: &str, visual_col: usize) -> usize {
    let mut current_visual = 0;
    let mut char_col = 0;

    for ch in text.chars() {
        if current_visual >= visual_col {
            return char_col;
        }

        if ch == '\t' {
            current_visual += TABULATOR_WIDTH - (current_visual % TABULATOR_WIDTH);
        } else {
            current_visual += 1;
        }
        char_col += 1;
    }

    char_col
}
