//! View module - rendering code
//!
//! Contains the Renderer struct and all rendering-related functionality.

pub mod frame;

pub use frame::{Frame, TextPainter};

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use winit::window::Window;

use jotpad::geometry::{
    char_col_to_visual_col, expand_tabs_for_display, Rect, WindowLayout, BUTTON_PADDING_X_PX,
    STATUS_BAR_PADDING_PX, TEXT_AREA_PADDING_PX,
};
use jotpad::model::{AppModel, TextSurface};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Drop glyphs rasterised at any size other than `font_size`
fn evict_other_sizes(cache: &mut GlyphCache, font_size: f32) {
    let bits = font_size.to_bits();
    cache.retain(|&(_, size), _| size == bits);
}

/// Point size used while the surface has no explicit font size
const DEFAULT_POINT_SIZE: i32 = 12;

/// Monospace fonts tried when the config names none
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Marker appended to the status message while the buffer has unsaved edits
const MODIFIED_MARKER: &str = "\u{25CF}";

/// Convert a point size to pixels at the given scale factor, never below 1px
pub fn point_size_to_px(point_size: Option<i32>, scale_factor: f64) -> f32 {
    let pt = point_size.unwrap_or(DEFAULT_POINT_SIZE) as f32;
    (pt * 4.0 / 3.0 * scale_factor as f32).max(1.0)
}

fn load_font(configured: Option<&Path>) -> Result<Font> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => {
                tracing::info!("Loaded font {}", path.display());
                return Ok(font);
            }
            Err(e) => tracing::warn!("Failed to parse font {}: {}", path.display(), e),
        }
    }

    Err(anyhow::anyhow!(
        "No usable monospace font found; set font_path in the config file"
    ))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we draw here and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a renderer for `window`, loading the font and sizing it
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_path: Option<&Path>,
        point_size: Option<i32>,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font = load_font(font_path)?;
        let font_size = point_size_to_px(point_size, scale_factor);
        let (line_metrics, char_width) = measure(&font, font_size)?;

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
            scale_factor,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Re-measure for a new point size or scale factor.
    ///
    /// Returns true when the metrics changed and the model needs them.
    pub fn set_font_size(&mut self, point_size: Option<i32>, scale_factor: f64) -> Result<bool> {
        let font_size = point_size_to_px(point_size, scale_factor);
        if font_size == self.font_size && scale_factor == self.scale_factor {
            return Ok(false);
        }
        let (line_metrics, char_width) = measure(&self.font, font_size)?;
        evict_other_sizes(&mut self.glyph_cache, font_size);
        self.font_size = font_size;
        self.scale_factor = scale_factor;
        self.line_metrics = line_metrics;
        self.char_width = char_width;
        tracing::debug!(
            "Font size {}px (line height {}, char width {})",
            font_size,
            self.line_height(),
            char_width
        );
        Ok(true)
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let layout = WindowLayout::for_model(model);
        let line_height = self.line_height() as f32;
        let ascent = self.line_metrics.ascent;

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                ascent,
                self.char_width,
            );

            frame.clear(model.theme.editor.background.to_argb_u32());
            render_text_area(&mut frame, &mut painter, model, &layout, line_height);
            render_toolbar(&mut frame, &mut painter, model, &layout, line_height);
            render_status_bar(&mut frame, &mut painter, model, &layout, line_height);
            render_dropdown(&mut frame, &mut painter, model, &layout, line_height);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn non_zero(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

fn measure(font: &Font, font_size: f32) -> Result<(LineMetrics, f32)> {
    let line_metrics = font
        .horizontal_line_metrics(font_size)
        .ok_or_else(|| anyhow::anyhow!("Font missing horizontal line metrics"))?;
    let (metrics, _) = font.rasterize('M', font_size);
    Ok((line_metrics, metrics.advance_width))
}

/// Top of a text line vertically centered in `rect`
fn text_y(rect: &Rect, line_height: f32) -> f32 {
    rect.y + ((rect.height - line_height) / 2.0).max(0.0)
}

fn render_toolbar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &WindowLayout,
    line_height: f32,
) {
    let theme = &model.theme.toolbar;
    let fg = theme.foreground.to_argb_u32();
    let button_bg = theme.button_background.to_argb_u32();
    let border = theme.button_border.to_argb_u32();

    frame.fill_rect(layout.toolbar, theme.background.to_argb_u32());
    frame.fill_rect(
        Rect::new(0.0, layout.toolbar.bottom() - 1.0, layout.toolbar.width, 1.0),
        border,
    );

    for (button, rect) in &layout.buttons {
        frame.draw_bordered_rect(*rect, button_bg, border);
        painter.draw(
            frame,
            rect.x + BUTTON_PADDING_X_PX,
            text_y(rect, line_height),
            button.label(),
            fg,
        );
    }

    let selector = layout.selector;
    frame.draw_bordered_rect(selector, button_bg, border);
    let label = format!("{} \u{25BE}", model.current_encoding().name());
    painter.draw(
        frame,
        selector.x + BUTTON_PADDING_X_PX,
        text_y(&selector, line_height),
        &label,
        fg,
    );
}

fn render_text_area(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &WindowLayout,
    line_height: f32,
) {
    let area = layout.text_area;
    let theme = &model.theme.editor;
    let fg = theme.foreground.to_argb_u32();
    let char_width = model.char_width;
    let origin_x = area.x + TEXT_AREA_PADDING_PX;
    let origin_y = area.y + TEXT_AREA_PADDING_PX;
    let vp = model.viewport;
    let cursor = model.surface.cursor();

    frame.set_clip(area);

    let last_line = (vp.top_line + vp.visible_lines + 1).min(model.surface.line_count());
    for (row, line_idx) in (vp.top_line..last_line).enumerate() {
        let y = origin_y + row as f32 * line_height;

        if model.ui.line_highlight.map(|h| h.line) == Some(line_idx) {
            frame.fill_rect(
                Rect::new(area.x, y, area.width, line_height),
                theme.current_line_background.to_argb_u32(),
            );
        }

        let Some(text) = model.surface.line_text(line_idx) else {
            continue;
        };
        let expanded = expand_tabs_for_display(&text);
        let visible: String = expanded
            .chars()
            .skip(vp.left_column)
            .take(vp.visible_columns + 1)
            .collect();
        painter.draw_monospace(frame, origin_x, y, &visible, fg);

        if line_idx == cursor.line && model.ui.cursor_visible {
            let visual = char_col_to_visual_col(&text, cursor.column);
            if visual >= vp.left_column {
                let x = origin_x + (visual - vp.left_column) as f32 * char_width;
                frame.fill_rect(
                    Rect::new(x, y, 2.0, line_height),
                    theme.cursor_color.to_argb_u32(),
                );
            }
        }
    }

    frame.clear_clip();
}

fn render_status_bar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &WindowLayout,
    line_height: f32,
) {
    let rect = layout.status_bar;
    let fg = model.theme.status_bar.foreground.to_argb_u32();
    frame.fill_rect(rect, model.theme.status_bar.background.to_argb_u32());

    let y = text_y(&rect, line_height);
    painter.draw(frame, rect.x + STATUS_BAR_PADDING_PX, y, &model.ui.status.position, fg);

    let mut right = model.ui.status.message.clone().unwrap_or_default();
    if model.surface.is_modified {
        if !right.is_empty() {
            right.push(' ');
        }
        right.push_str(MODIFIED_MARKER);
    }
    if !right.is_empty() {
        let w = painter.measure_width(&right);
        let x = (rect.x + rect.width - w - STATUS_BAR_PADDING_PX).max(rect.x);
        painter.draw(frame, x, y, &right, fg);
    }
}

fn render_dropdown(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &WindowLayout,
    line_height: f32,
) {
    if layout.dropdown_items.is_empty() {
        return;
    }
    let theme = &model.theme.toolbar;
    let fg = theme.foreground.to_argb_u32();
    let selected = model.encoding.selected_index();

    for (index, (rect, encoding)) in layout
        .dropdown_items
        .iter()
        .zip(model.encoding.options())
        .enumerate()
    {
        let bg = if index == selected {
            theme.dropdown_selected
        } else {
            theme.dropdown_background
        };
        frame.draw_bordered_rect(*rect, bg.to_argb_u32(), theme.button_border.to_argb_u32());
        painter.draw(
            frame,
            rect.x + BUTTON_PADDING_X_PX,
            text_y(rect, line_height),
            encoding.name(),
            fg,
        );
    }
}
