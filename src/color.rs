//! # Colors
//!
//! Parses the color strings accepted on the command line.
//!
//! Accepted forms:
//!
//! | Form | Example | Notes |
//! |------|---------|-------|
//! | `#RGB` | `#08F` | each digit doubled |
//! | `#RRGGBB` | `#0080FF` | opaque |
//! | `#AARRGGBB` | `#800080FF` | alpha first, HTML/.NET order |
//! | name | `DarkBlue` | case-insensitive |

use crate::error::Code128Error;
use image::Rgba;

/// An RGBA color.
pub type Color = Rgba<u8>;

pub const BLACK: Color = Rgba([0, 0, 0, 255]);
pub const WHITE: Color = Rgba([255, 255, 255, 255]);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("lightgray", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("navy", [0, 0, 128]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("darkblue", [0, 0, 139]),
    ("darkred", [139, 0, 0]),
    ("darkgreen", [0, 100, 0]),
    ("gold", [255, 215, 0]),
    ("ivory", [255, 255, 240]),
    ("beige", [245, 245, 220]),
];

/// Parse a hex code or color name.
///
/// `"transparent"` yields a fully transparent white.
pub fn parse_color(input: &str) -> Result<Color, Code128Error> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Code128Error::InvalidColor(input.to_string()));
    }

    let name = trimmed.to_ascii_lowercase();
    if name == "transparent" {
        return Ok(Rgba([255, 255, 255, 0]));
    }

    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, [r, g, b])| Rgba([*r, *g, *b, 255]))
        .ok_or_else(|| Code128Error::InvalidColor(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let d = digit.to_digit(16)? as u8;
                *slot = d * 16 + d;
            }
            Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
        }
        6 => Some(Rgba([byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255])),
        8 => Some(Rgba([
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
            byte(&hex[0..2])?,
        ])),
        _ => None,
    }
}
