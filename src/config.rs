//! # Barcode Options
//!
//! Defaults and builder for [`generate_barcode_image`], the single entry
//! point that encodes text and renders it.
//!
//! ## Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | Image size | 1024 × 320 |
//! | Font size | 48 px |
//! | Colors | black on white |
//! | Text | `Code128B` |
//! | Module width | auto |
//! | Caption | shown |
//! | Quiet zone | off |
//!
//! ## Usage
//!
//! ```
//! use code128b::config::BarcodeOptions;
//!
//! let image = BarcodeOptions::new("Example ABC")
//!     .size(600, 200)
//!     .quiet_zone()
//!     .generate()
//!     .unwrap();
//! assert_eq!(image.height(), 200);
//! ```

use crate::code128;
use crate::color::{self, Color};
use crate::error::Code128Error;
use crate::render::{self, ModuleWidth, RenderOptions};
use image::RgbaImage;

/// Input of [`generate_barcode_image`].
#[derive(Debug, Clone)]
pub struct BarcodeOptions {
    pub image_width: u32,
    pub image_height: u32,
    pub font_size: f32,
    pub foreground: Color,
    pub background: Color,
    pub text: String,
    pub module_width: ModuleWidth,
    pub suppress_caption: bool,
    pub add_quiet_zone: bool,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            image_width: 1024,
            image_height: 320,
            font_size: 48.0,
            foreground: color::BLACK,
            background: color::WHITE,
            text: "Code128B".to_string(),
            module_width: ModuleWidth::Auto,
            suppress_caption: false,
            add_quiet_zone: false,
        }
    }
}

impl BarcodeOptions {
    /// Default options for `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Set the requested image size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set foreground and background colors.
    pub fn colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Use a fixed module width. Zero or less selects auto.
    pub fn module_width(mut self, width: i32) -> Self {
        self.module_width = ModuleWidth::from(width);
        self
    }

    /// Draw the bars only.
    pub fn no_caption(mut self) -> Self {
        self.suppress_caption = true;
        self
    }

    /// Pad the symbol with a blank quiet zone on both sides.
    pub fn quiet_zone(mut self) -> Self {
        self.add_quiet_zone = true;
        self
    }

    /// Encode and render. Same as [`generate_barcode_image`].
    pub fn generate(&self) -> Result<RgbaImage, Code128Error> {
        generate_barcode_image(self)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            image_width: self.image_width,
            image_height: self.image_height,
            module_width: self.module_width,
            font_size: self.font_size,
            foreground: self.foreground,
            background: self.background,
            caption: self.text.clone(),
            suppress_caption: self.suppress_caption,
        }
    }
}

/// Encode `options.text` as Code128 Subset B and render it.
///
/// # Errors
///
/// Returns [`Code128Error::Backend`] if the caption font cannot be loaded.
/// Unsupported characters are never an error; they encode as spaces.
pub fn generate_barcode_image(options: &BarcodeOptions) -> Result<RgbaImage, Code128Error> {
    let sequence = code128::encode_with_quiet_zone(&options.text, options.add_quiet_zone);
    render::render(&sequence, &options.render_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BarcodeOptions::default();
        assert_eq!((options.image_width, options.image_height), (1024, 320));
        assert_eq!(options.font_size, 48.0);
        assert_eq!(options.text, "Code128B");
        assert_eq!(options.module_width, ModuleWidth::Auto);
        assert!(!options.suppress_caption);
        assert!(!options.add_quiet_zone);
    }

    #[test]
    fn test_builder() {
        let options = BarcodeOptions::new("abc")
            .size(10, 20)
            .font_size(12.0)
            .colors(color::WHITE, color::BLACK)
            .module_width(4)
            .no_caption()
            .quiet_zone();
        assert_eq!(options.text, "abc");
        assert_eq!((options.image_width, options.image_height), (10, 20));
        assert_eq!(options.foreground, color::WHITE);
        assert_eq!(options.module_width, ModuleWidth::Fixed(4));
        assert!(options.suppress_caption);
        assert!(options.add_quiet_zone);

        let render = options.render_options();
        assert_eq!(render.caption, "abc");
        assert!(render.suppress_caption);
    }

    #[test]
    fn test_fixed_width_image_size() {
        // 3 chars: 11 * 5 + 2 = 57 modules, plus 20 quiet modules
        let image = BarcodeOptions::new("abc").module_width(2).quiet_zone().generate().unwrap();
        assert_eq!(image.width(), 2 * 77);
    }
}
