//! # Image Output
//!
//! Writes rendered barcodes to disk. Images are always encoded as PNG,
//! whatever the file name says; a name without an extension is fine.

use crate::error::Code128Error;
use image::{ImageFormat, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Save `image` as a PNG file at `path`.
///
/// # Errors
///
/// Returns [`Code128Error::Io`] if the file cannot be created and
/// [`Code128Error::Image`] if PNG encoding fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), Code128Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| Code128Error::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("code128b-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_without_extension_writes_png() {
        let path = temp_path("barcode");
        let mut image = RgbaImage::from_pixel(4, 2, WHITE);
        image.put_pixel(1, 0, BLACK);

        save_png(&image, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.as_raw(), image.as_raw());
    }

    #[test]
    fn test_save_with_other_extension_still_png() {
        let path = temp_path("barcode.jpg");
        save_png(&RgbaImage::from_pixel(3, 3, WHITE), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let path = temp_path("no-such-dir").join("barcode.png");
        let result = save_png(&RgbaImage::new(1, 1), &path);
        assert!(matches!(result, Err(Code128Error::Io(_))));
    }
}
