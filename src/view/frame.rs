//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings, Metrics};

use crate::geometry::Rect;

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Advance used for layout when no font is loaded
const FALLBACK_ADVANCE: f32 = 7.5;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). `alpha` determines the blend
/// ratio; the alpha byte of `fg` is ignored.
///
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

#[inline]
fn color_alpha(color: u32) -> f32 {
    ((color >> 24) & 0xFF) as f32 / 255.0
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
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
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

    /// Pixel span covered by `rect` after clipping
    fn span(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).max(self.min_y());
        let x1 = (rect.right().max(0.0) as usize).min(self.max_x());
        let y1 = (rect.bottom().max(0.0) as usize).min(self.max_y());
        (x0, y0, x1, y1)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0.min(x1)..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = color_alpha(color);
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Fill a rectangle with rounded corners, alpha blended
    pub fn fill_rounded_rect_blended(&mut self, rect: Rect, radius: f32, color: u32) {
        let alpha = color_alpha(color);
        let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if alpha <= 0.0 {
            return;
        }
        if radius < 1.0 {
            return self.fill_rect_blended(rect, color);
        }

        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let py = y as f32 + 0.5;
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                // Distance from the nearest corner circle center, if in a corner
                let cx = px.clamp(rect.x + radius, rect.right() - radius);
                let cy = py.clamp(rect.y + radius, rect.bottom() - radius);
                let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = y * self.width + x;
                    self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha * coverage);
                }
            }
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }

        let idx = y * self.width + x;
        let alpha = color_alpha(color);
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }
}

/// Text rendering context wrapping an optional font and its glyph cache.
///
/// Without a font, labels are laid out with a fixed advance and drawn as
/// placeholder bars so geometry stays identical in headless runs.
pub struct TextPainter {
    font: Option<Font>,
    glyph_cache: GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: f32,
}

impl TextPainter {
    /// Painter that draws placeholder bars instead of glyphs
    pub fn placeholder(font_size: f32) -> Self {
        Self {
            font: None,
            glyph_cache: GlyphCache::new(),
            font_size,
            ascent: font_size * 0.8,
            line_height: font_size * 1.25,
        }
    }

    /// Load the font at `path`, falling back to placeholders if it is missing or invalid
    pub fn load(path: Option<&Path>, font_size: f32) -> Self {
        let Some(path) = path else {
            return Self::placeholder(font_size);
        };

        let font = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| {
                Font::from_bytes(bytes, FontSettings::default()).map_err(|e| e.to_string())
            });

        match font {
            Ok(font) => {
                let metrics = font.horizontal_line_metrics(font_size);
                let (ascent, line_height) = metrics
                    .map(|m| (m.ascent, m.new_line_size))
                    .unwrap_or((font_size * 0.8, font_size * 1.25));
                tracing::info!("Loaded label font from {}", path.display());
                Self {
                    font: Some(font),
                    glyph_cache: GlyphCache::new(),
                    font_size,
                    ascent,
                    line_height,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load font {}: {}", path.display(), e);
                Self::placeholder(font_size)
            }
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    #[inline]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Measure text width in pixels
    pub fn measure_width(&self, text: &str) -> f32 {
        match &self.font {
            Some(font) => text
                .chars()
                .map(|ch| font.metrics(ch, self.font_size).advance_width)
                .sum(),
            None => text.chars().count() as f32 * FALLBACK_ADVANCE,
        }
    }

    /// Longest prefix of `text` that fits `max_width`, with an ellipsis when `ellipsis` is set
    pub fn fit(&self, text: &str, max_width: f32, ellipsis: bool) -> String {
        if self.measure_width(text) <= max_width {
            return text.to_string();
        }

        let suffix = if ellipsis { "…" } else { "" };
        let budget = max_width - self.measure_width(suffix);
        let mut fitted = String::new();
        let mut width = 0.0;
        for ch in text.chars() {
            let advance = self.measure_width(ch.encode_utf8(&mut [0; 4]));
            if width + advance > budget {
                break;
            }
            width += advance;
            fitted.push(ch);
        }
        fitted.push_str(suffix);
        fitted
    }

    /// Draw text with its top-left corner at (x, y); `color` alpha scales glyph coverage
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: u32) {
        let color_alpha = color_alpha(color);
        let Some(font) = &self.font else {
            let bar = Rect::new(
                x,
                y + self.ascent * 0.35,
                self.measure_width(text),
                self.ascent * 0.5,
            );
            let faded = ((color_alpha * 0.35 * 255.0) as u32) << 24 | (color & 0x00FF_FFFF);
            frame.fill_rect_blended(bar, faded);
            return;
        };

        let mut current_x = x;
        let baseline = y + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let coverage = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if coverage == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px < 0 || py < 0 {
                        continue;
                    }
                    let alpha = coverage as f32 / 255.0 * color_alpha;
                    let argb = ((alpha * 255.0) as u32) << 24 | (color & 0x00FF_FFFF);
                    frame.blend_pixel(px as usize, py as usize, argb);
                }
            }

            current_x += metrics.advance_width;
        }
    }
}
