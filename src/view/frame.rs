//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;
use jotpad::geometry::Rect;

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB).
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let height = if actual_size < expected_size && width > 0 {
            actual_size / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).max(self.min_y());
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Blend a pixel with alpha in `[0, 1]` (respects clip rect)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        self.fill_rect(rect, fill_color);

        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1.0), border_color);
        self.fill_rect(Rect::new(x, y + height - 1.0, width, 1.0), border_color);
        self.fill_rect(Rect::new(x, y, 1.0, height), border_color);
        self.fill_rect(Rect::new(x + width - 1.0, y, 1.0, height), border_color);
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
        }
    }

    /// Draw text at the specified position using each glyph's own advance
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: u32) {
        let mut current_x = x;
        for ch in text.chars() {
            current_x += self.draw_glyph(frame, current_x, y, ch, color);
        }
    }

    /// Draw text on a fixed column grid so columns line up with hit-testing
    pub fn draw_monospace(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: u32) {
        for (i, ch) in text.chars().enumerate() {
            self.draw_glyph(frame, x + i as f32 * self.char_width, y, ch, color);
        }
    }

    /// Rasterise (or fetch) one glyph and blend it in. Returns its advance.
    fn draw_glyph(&mut self, frame: &mut Frame, x: f32, y: f32, ch: char, color: u32) -> f32 {
        let key = (ch, self.font_size.to_bits());
        let font = self.font;
        let font_size = self.font_size;
        let (metrics, bitmap) = self
            .glyph_cache
            .entry(key)
            .or_insert_with(|| font.rasterize(ch, font_size));

        let baseline = y + self.ascent;
        let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

        for bitmap_y in 0..metrics.height {
            for bitmap_x in 0..metrics.width {
                let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                if alpha == 0 {
                    continue;
                }
                let px = x as isize + bitmap_x as isize + metrics.xmin as isize;
                let py = (glyph_top + bitmap_y as f32) as isize;
                if px >= 0 && py >= 0 {
                    frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                }
            }
        }

        metrics.advance_width
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let font = self.font;
        let font_size = self.font_size;
        text.chars()
            .map(|ch| {
                let (metrics, _) = self
                    .glyph_cache
                    .entry((ch, font_size.to_bits()))
                    .or_insert_with(|| font.rasterize(ch, font_size));
                metrics.advance_width
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 0.0), 0xFF000000);
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
    }

    #[test]
    fn test_fill_rect_is_clipped_to_buffer() {
        let mut buf = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), 1);
        assert_eq!(buf.iter().filter(|&&p| p == 1).count(), 4);
    }

    #[test]
    fn test_clip_limits_fill() {
        let mut buf = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buf, 4, 4);
        frame.set_clip(Rect::new(0.0, 0.0, 2.0, 1.0));
        frame.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), 7);
        assert_eq!(buf.iter().filter(|&&p| p == 7).count(), 2);
    }
}
