//! Caption label rendering.
//!
//! The caption is drawn into its own label bitmap with the Spleen bitmap
//! fonts, then stretched into the rectangle reserved under the bars.
//!
//! ```text
//! font_size 48 → Spleen 12x24, scale 2.0
//!
//! ┌──────────── label (chars × 24 + stroke) ────────────┐
//! │ background fill, bold glyphs in foreground          │ 48 px
//! └─────────────────────────────────────────────────────┘
//!                      │ resize (triangle filter)
//!                      ▼
//!        ┌──────── caption rectangle ────────┐
//! ```

use crate::color::Color;
use crate::error::Code128Error;
use image::{RgbaImage, imageops::FilterType};
use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};

/// Spleen face used for a given font size.
#[derive(Debug, Clone, Copy)]
struct Face {
    data: &'static [u8],
    cell_width: usize,
    cell_height: usize,
}

const SMALL_FACE: Face = Face {
    data: FONT_6X12,
    cell_width: 6,
    cell_height: 12,
};

const LARGE_FACE: Face = Face {
    data: FONT_12X24,
    cell_width: 12,
    cell_height: 24,
};

fn face_for_size(font_size: f32) -> Face {
    if font_size < LARGE_FACE.cell_height as f32 {
        SMALL_FACE
    } else {
        LARGE_FACE
    }
}

/// Measured size of a caption label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionMetrics {
    /// Font pixels → label pixels.
    pub scale: f32,
    /// Advance per character in pixels.
    pub char_width: u32,
    /// Extra width added to every lit font pixel for the bold weight.
    pub stroke: u32,
    pub width: u32,
    pub height: u32,
}

/// Measure `text` rendered bold at `font_size` pixels.
///
/// Non-positive or non-finite sizes measure as an empty label.
pub fn measure(text: &str, font_size: f32) -> CaptionMetrics {
    let face = face_for_size(font_size);
    let height = if font_size.is_finite() {
        font_size.round().max(0.0) as u32
    } else {
        0
    };
    let scale = height as f32 / face.cell_height as f32;
    let char_width = ((face.cell_width as f32 * scale).round() as u32).max(1);
    let stroke = ((scale / 2.0).round() as u32).max(1);

    let chars = text.chars().count() as u32;
    let width = if chars == 0 || height == 0 {
        0
    } else {
        chars.saturating_mul(char_width).saturating_add(stroke)
    };

    CaptionMetrics {
        scale,
        char_width,
        stroke,
        width,
        height,
    }
}

/// Compose the caption label: background fill, then bold text in the
/// foreground color.
pub fn compose_label(
    text: &str,
    font_size: f32,
    foreground: Color,
    background: Color,
) -> Result<RgbaImage, Code128Error> {
    draw_label(text, font_size, measure(text, font_size), foreground, background)
}

fn draw_label(
    text: &str,
    font_size: f32,
    metrics: CaptionMetrics,
    foreground: Color,
    background: Color,
) -> Result<RgbaImage, Code128Error> {
    let mut label = RgbaImage::from_pixel(metrics.width, metrics.height, background);
    if metrics.width == 0 || metrics.height == 0 {
        return Ok(label);
    }

    let face = face_for_size(font_size);
    let mut font = PSF2Font::new(face.data)
        .map_err(|_| Code128Error::Backend("failed to load Spleen font".to_string()))?;

    let mut cursor_x = 0u32;
    for ch in text.chars() {
        let utf8 = ch.to_string();
        // Glyphs missing from the font advance without drawing
        if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
            for (row_y, row) in glyph.enumerate() {
                let y0 = scaled(row_y, metrics.scale);
                let y1 = scaled(row_y + 1, metrics.scale).max(y0 + 1);
                for (col_x, on) in row.enumerate() {
                    if !on {
                        continue;
                    }
                    let x0 = cursor_x + scaled(col_x, metrics.scale);
                    let x1 = (cursor_x + scaled(col_x + 1, metrics.scale)).max(x0 + 1) + metrics.stroke;
                    fill(&mut label, x0..x1, y0..y1, foreground);
                }
            }
        }
        cursor_x += metrics.char_width;
    }

    Ok(label)
}

/// Stretch `label` to `width` × `height`. Returns `None` for an empty target
/// or an empty label.
pub fn stretch(label: &RgbaImage, width: u32, height: u32) -> Option<RgbaImage> {
    if width == 0 || height == 0 || label.width() == 0 || label.height() == 0 {
        return None;
    }
    Some(image::imageops::resize(label, width, height, FilterType::Triangle))
}

fn scaled(pos: usize, scale: f32) -> u32 {
    (pos as f32 * scale).floor() as u32
}

fn fill(label: &mut RgbaImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>, color: Color) {
    let (w, h) = label.dimensions();
    for y in ys.start.min(h)..ys.end.min(h) {
        for x in xs.start.min(w)..xs.end.min(w) {
            label.put_pixel(x, y, color);
        }
    }
}
