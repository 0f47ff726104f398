//! # code128b CLI
//!
//! Command-line interface for creating Code128 Subset B barcode images.
//!
//! ## Usage
//!
//! ```bash
//! # Default 1024x320 PNG with caption
//! code128b product.png "Example ABC"
//!
//! # Words after the file name are joined with spaces
//! code128b product.png Example ABC
//!
//! # Custom size and colors, no caption, with quiet zone
//! code128b -w 600 -H 200 -f "#0080FF" -b Ivory --no-text --quiet-zone code.png 12345
//!
//! # Fixed module width (image width follows the symbol)
//! code128b --module-width 3 code.png HELLO
//! ```

use clap::Parser;
use std::path::PathBuf;

use code128b::{
    BarcodeOptions, Code128Error, ModuleWidth, code128, color::parse_color,
    output::save_png, render::RenderGeometry,
};

/// Create an image containing a Code128 B barcode
#[derive(Parser, Debug)]
#[command(name = "code128b")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image file to write (always PNG, whatever the extension)
    file: PathBuf,

    /// Text to encode
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Image width in pixels
    #[arg(short = 'w', long, default_value = "1024")]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value = "320")]
    height: u32,

    /// Foreground color, name or HTML code (e.g. #0080FF)
    #[arg(short = 'f', long, default_value = "Black")]
    foreground: String,

    /// Background color, name or HTML code (e.g. #0080FF)
    #[arg(short = 'b', long, default_value = "White")]
    background: String,

    /// Caption font size in pixels
    #[arg(short = 's', long, default_value = "48")]
    size: f32,

    /// Module width in pixels (0 = fit to image width)
    #[arg(short = 'm', long, default_value = "0", allow_negative_numbers = true)]
    module_width: i32,

    /// Draw only the bars, without the caption
    #[arg(short = 'n', long)]
    no_text: bool,

    /// Add leading and trailing quiet zone
    #[arg(short = 'q', long)]
    quiet_zone: bool,

    /// Print the resolved geometry to stdout
    ///
    /// No logger is installed, so library log records stay hidden.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Code128Error> {
    let cli = Cli::parse();

    let text = cli.text.join(" ");
    let mut options = BarcodeOptions::new(&text)
        .size(cli.width, cli.height)
        .font_size(cli.size)
        .colors(parse_color(&cli.foreground)?, parse_color(&cli.background)?)
        .module_width(cli.module_width);
    if cli.no_text {
        options = options.no_caption();
    }
    if cli.quiet_zone {
        options = options.quiet_zone();
    }

    if cli.verbose {
        print_geometry(&options);
    }

    let image = options.generate()?;
    save_png(&image, &cli.file)?;

    println!("Barcode \"{}\" saved to \"{}\".", text, cli.file.display());
    Ok(())
}

fn print_geometry(options: &BarcodeOptions) {
    let sequence = code128::encode_with_quiet_zone(&options.text, options.add_quiet_zone);
    let geometry = RenderGeometry::resolve(
        sequence.len(),
        options.image_width,
        options.image_height,
        options.module_width,
    );
    let mode = match options.module_width {
        ModuleWidth::Auto => "auto",
        ModuleWidth::Fixed(_) => "fixed",
    };
    println!("Modules:      {}", sequence.len());
    println!("Checksum:     {}", sequence.checksum_index());
    println!("Module width: {} px ({})", geometry.module_width, mode);
    println!("Image:        {}x{}", geometry.image_width, geometry.image_height);
    println!(
        "Bars:         x {}..{}",
        geometry.first_module_pos, geometry.last_module_pos
    );
}
