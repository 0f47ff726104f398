//! # code128b - Code128 Subset B Barcode Images
//!
//! code128b encodes printable ASCII text as a Code128 Subset B symbol and
//! renders it as a raster image. It provides:
//!
//! - **Encoding**: the 107-symbol table, modulo-103 checksum, quiet zone
//! - **Rendering**: bars scaled to fit a canvas, with a stretched caption
//! - **Colors**: HTML hex codes and named colors for the CLI
//!
//! ## Quick Start
//!
//! ```
//! use code128b::{BarcodeOptions, generate_barcode_image};
//!
//! let options = BarcodeOptions::new("Code128B");
//! let image = generate_barcode_image(&options)?;
//! assert_eq!((image.width(), image.height()), (1024, 320));
//!
//! # Ok::<(), code128b::Code128Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`code128`] | Symbol table and encoder |
//! | [`render`] | Raster rendering and caption |
//! | [`config`] | Options and the one-call entry point |
//! | [`color`] | Color parsing |
//! | [`output`] | PNG file output |
//! | [`error`] | Error types |
//!
//! Unsupported characters never fail an encode; they are drawn as spaces.

pub mod code128;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod render;

// Re-exports for convenience
pub use code128::{ModuleSequence, encode, encode_with_quiet_zone};
pub use color::{Color, parse_color};
pub use config::{BarcodeOptions, generate_barcode_image};
pub use error::Code128Error;
pub use output::save_png;
pub use render::{ModuleWidth, RenderOptions, render};
