//! # Rendering Module
//!
//! Draws an encoded [`ModuleSequence`] onto an RGBA raster image.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────── image_width ────────────────────────┐
//! │                         5 px margin                         │
//! │ first_module_pos ─▶ ▌▌ ▌ ▌▌▌ ▌ ▌▌ ▌▌▌ ▌ ▌▌ ◀─ last_module_pos │
//! │                     ▌▌ ▌ ▌▌▌ ▌ ▌▌ ▌▌▌ ▌ ▌▌                  │
//! │                     ▌▌ ┌──── caption ───┐ ▌▌                 │
//! │                         5 px margin                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The symbol is centered horizontally. The caption rectangle is inset by
//! one symbol width (11 modules) from each end of the drawn bars and sits at
//! the bottom of the canvas.
//!
//! ## Usage Example
//!
//! ```
//! use code128b::code128;
//! use code128b::render::{self, ModuleWidth, RenderOptions};
//!
//! let sequence = code128::encode("Hello");
//! let options = RenderOptions {
//!     image_width: 400,
//!     image_height: 120,
//!     module_width: ModuleWidth::Auto,
//!     suppress_caption: true,
//!     ..Default::default()
//! };
//! let image = render::render(&sequence, &options).unwrap();
//! assert_eq!(image.height(), 120);
//! ```

pub mod caption;

use crate::code128::ModuleSequence;
use crate::code128::table::MODULE_LEN;
use crate::color::{self, Color};
use crate::error::Code128Error;
use image::RgbaImage;

/// Left border before the symbol starts.
pub const BORDER_LEFT: u32 = 0;
/// Right border after the symbol ends.
pub const BORDER_RIGHT: u32 = 0;
/// Blank rows above and below the bars.
pub const BAR_MARGIN: u32 = 5;

/// Pixel width of one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleWidth {
    /// Largest width that fits the requested image width (at least 1)
    #[default]
    Auto,
    /// Fixed width; the image width is recomputed to fit the symbol
    Fixed(u32),
}

impl From<i32> for ModuleWidth {
    /// Zero and negative values select [`ModuleWidth::Auto`].
    fn from(value: i32) -> Self {
        if value <= 0 {
            ModuleWidth::Auto
        } else {
            ModuleWidth::Fixed(value as u32)
        }
    }
}

/// Everything `render` needs besides the sequence.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub image_width: u32,
    pub image_height: u32,
    pub module_width: ModuleWidth,
    /// Caption glyph height in pixels.
    pub font_size: f32,
    pub foreground: Color,
    pub background: Color,
    pub caption: String,
    pub suppress_caption: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_width: 1024,
            image_height: 320,
            module_width: ModuleWidth::Auto,
            font_size: 48.0,
            foreground: color::BLACK,
            background: color::WHITE,
            caption: String::new(),
            suppress_caption: false,
        }
    }
}

/// Resolved pixel geometry of a rendered symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderGeometry {
    pub module_width: u32,
    pub image_width: u32,
    pub image_height: u32,
    /// X of the first module.
    pub first_module_pos: u32,
    /// X just past the last module.
    pub last_module_pos: u32,
}

/// Target rectangle of the stretched caption. May extend past the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl RenderGeometry {
    /// Resolve module width and canvas size for `sequence_len` modules.
    ///
    /// The drawn symbol always fits: the image grows when the requested
    /// width is too narrow.
    pub fn resolve(
        sequence_len: usize,
        image_width: u32,
        image_height: u32,
        module_width: ModuleWidth,
    ) -> Self {
        let len = u32::try_from(sequence_len).unwrap_or(u32::MAX).max(1);
        let mut image_width = image_width;

        let module_width = match module_width {
            ModuleWidth::Auto => {
                let available = image_width.saturating_sub(BORDER_LEFT + BORDER_RIGHT);
                (available / len).max(1)
            }
            ModuleWidth::Fixed(width) => {
                let width = width.max(1);
                image_width = width.saturating_mul(len);
                width
            }
        };

        let drawn = module_width.saturating_mul(len);
        let required = drawn.saturating_add(BORDER_LEFT + BORDER_RIGHT);
        if required > image_width {
            image_width = required;
        }

        let first_module_pos =
            BORDER_LEFT + (image_width - BORDER_LEFT - BORDER_RIGHT - drawn) / 2;

        Self {
            module_width,
            image_width,
            image_height,
            first_module_pos,
            last_module_pos: first_module_pos + drawn,
        }
    }

    /// Height of each bar.
    pub fn bar_height(&self) -> u32 {
        self.image_height.saturating_sub(2 * BAR_MARGIN)
    }

    /// Caption rectangle for a label `label_height` pixels tall.
    ///
    /// `None` when the inset leaves no positive width.
    pub fn caption_rect(&self, label_height: u32) -> Option<CaptionRect> {
        let inset = i64::from(self.module_width) * MODULE_LEN as i64;
        let x = i64::from(self.first_module_pos) + inset;
        let width = i64::from(self.last_module_pos) - inset - x;
        if width <= 0 || label_height == 0 {
            return None;
        }

        Some(CaptionRect {
            x,
            y: i64::from(self.image_height) - i64::from(label_height) + BAR_MARGIN as i64,
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: label_height,
        })
    }
}

/// Render `sequence` into a new image.
///
/// # Errors
///
/// Returns [`Code128Error::Backend`] if the caption font cannot be loaded.
pub fn render(sequence: &ModuleSequence, options: &RenderOptions) -> Result<RgbaImage, Code128Error> {
    let geometry = RenderGeometry::resolve(
        sequence.len(),
        options.image_width,
        options.image_height,
        options.module_width,
    );
    log::debug!(
        "render geometry: {:?} (quiet zone {})",
        geometry,
        sequence.has_quiet_zone()
    );

    let mut image = RgbaImage::from_pixel(geometry.image_width, geometry.image_height, options.background);

    let bar_height = geometry.bar_height();
    let mut pos_x = geometry.first_module_pos;
    for &bar in sequence.modules() {
        if bar {
            fill_rect(
                &mut image,
                pos_x,
                BAR_MARGIN,
                geometry.module_width,
                bar_height,
                options.foreground,
            );
        }
        pos_x += geometry.module_width;
    }

    if !options.suppress_caption {
        draw_caption(&mut image, &geometry, options)?;
    }

    Ok(image)
}

fn draw_caption(
    canvas: &mut RgbaImage,
    geometry: &RenderGeometry,
    options: &RenderOptions,
) -> Result<(), Code128Error> {
    let label = caption::compose_label(
        &options.caption,
        options.font_size,
        options.foreground,
        options.background,
    )?;

    let Some(rect) = geometry.caption_rect(label.height()) else {
        log::debug!("caption skipped: no room between the guard symbols");
        return Ok(());
    };

    if let Some(stretched) = caption::stretch(&label, rect.width, rect.height) {
        image::imageops::overlay(canvas, &stretched, rect.x, rect.y);
    }
    Ok(())
}

/// Fill a rectangle, clipped to the image.
fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Color) {
    let (img_w, img_h) = image.dimensions();
    let x_end = x.saturating_add(width).min(img_w);
    let y_end = y.saturating_add(height).min(img_h);
    for py in y.min(img_h)..y_end {
        for px in x.min(img_w)..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code128;
    use crate::color::{BLACK, WHITE};

    fn bars_only(image_width: u32, module_width: ModuleWidth) -> RenderOptions {
        RenderOptions {
            image_width,
            image_height: 60,
            module_width,
            suppress_caption: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_module_width_from_i32() {
        assert_eq!(ModuleWidth::from(0), ModuleWidth::Auto);
        assert_eq!(ModuleWidth::from(-4), ModuleWidth::Auto);
        assert_eq!(ModuleWidth::from(3), ModuleWidth::Fixed(3));
    }

    #[test]
    fn test_auto_geometry() {
        // "Code128B": 11 * 10 + 2 = 112 modules, 1024 / 112 = 9
        let g = RenderGeometry::resolve(112, 1024, 320, ModuleWidth::Auto);
        assert_eq!(g.module_width, 9);
        assert_eq!(g.image_width, 1024);
        assert_eq!(g.first_module_pos, 8);
        assert_eq!(g.last_module_pos, 8 + 1008);
    }

    #[test]
    fn test_auto_geometry_grows_narrow_canvas() {
        let g = RenderGeometry::resolve(112, 50, 320, ModuleWidth::Auto);
        assert_eq!(g.module_width, 1);
        assert_eq!(g.image_width, 112);
        assert_eq!(g.first_module_pos, 0);
    }

    #[test]
    fn test_fixed_geometry_overrides_width() {
        let g = RenderGeometry::resolve(112, 1024, 320, ModuleWidth::Fixed(3));
        assert_eq!(g.module_width, 3);
        assert_eq!(g.image_width, 336);
        assert_eq!(g.first_module_pos, 0);

        let g = RenderGeometry::resolve(112, 1024, 320, ModuleWidth::Fixed(0));
        assert_eq!(g.module_width, 1);
        assert_eq!(g.image_width, 112);
    }

    #[test]
    fn test_auto_width_monotonic() {
        let mut previous = 0;
        for width in (0..2000).step_by(7) {
            let g = RenderGeometry::resolve(134, width, 100, ModuleWidth::Auto);
            assert!(g.module_width >= previous);
            previous = g.module_width;
        }
    }

    #[test]
    fn test_caption_rect() {
        let g = RenderGeometry::resolve(112, 1024, 320, ModuleWidth::Auto);
        let rect = g.caption_rect(48).unwrap();
        assert_eq!(rect.x, 8 + 99);
        assert_eq!(rect.width, 1016 - 99 - 107);
        assert_eq!(rect.y, 320 - 48 + 5);
        assert_eq!(rect.height, 48);

        // 24 modules at width 1 leave 2 modules between the insets
        let tiny = RenderGeometry::resolve(24, 24, 40, ModuleWidth::Auto);
        assert_eq!(tiny.caption_rect(10).unwrap().width, 2);
        let none = RenderGeometry::resolve(22, 22, 40, ModuleWidth::Auto);
        assert_eq!(none.caption_rect(10), None);
    }

    #[test]
    fn test_bars_follow_modules() {
        let sequence = code128::encode("AB");
        let image = render(&sequence, &bars_only(0, ModuleWidth::Fixed(2))).unwrap();
        assert_eq!(image.width(), 2 * sequence.len() as u32);

        for (i, &bar) in sequence.modules().iter().enumerate() {
            let x = 2 * i as u32;
            let expected = if bar { BLACK } else { WHITE };
            assert_eq!(*image.get_pixel(x, 30), expected, "module {}", i);
            assert_eq!(*image.get_pixel(x + 1, 30), expected, "module {}", i);
            // Margins stay clear
            assert_eq!(*image.get_pixel(x, 4), WHITE);
            assert_eq!(*image.get_pixel(x, 55), WHITE);
        }
    }

    #[test]
    fn test_tiny_canvas_does_not_panic() {
        let sequence = code128::encode("x");
        let options = RenderOptions {
            image_width: 0,
            image_height: 3,
            font_size: 200.0,
            caption: "x".to_string(),
            ..Default::default()
        };
        let image = render(&sequence, &options).unwrap();
        assert_eq!(image.width(), sequence.len() as u32);
        assert_eq!(image.height(), 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let sequence = code128::encode_with_quiet_zone("Repeat 42", true);
        let options = RenderOptions {
            image_width: 700,
            image_height: 200,
            font_size: 30.0,
            caption: "Repeat 42".to_string(),
            ..Default::default()
        };
        let first = render(&sequence, &options).unwrap();
        let second = render(&sequence, &options).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
