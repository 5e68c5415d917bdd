use std::fmt;
use std::str::FromStr;

use crate::foundation::error::StillreelError;

/// Opaque 8-bit RGB color used for captions and the canvas background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `#rrggbb`, `#rgb` (the `#` is optional) or one of a few color names.
impl FromStr for Rgb8 {
    type Err = StillreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(named) = named_color(s) {
            return Ok(named);
        }
        parse_hex(s).map_err(StillreelError::validation)
    }
}

fn named_color(name: &str) -> Option<Rgb8> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => Rgb8::BLACK,
        "white" => Rgb8::WHITE,
        "red" => Rgb8::new(255, 0, 0),
        "green" => Rgb8::new(0, 128, 0),
        "blue" => Rgb8::new(0, 0, 255),
        "yellow" => Rgb8::new(255, 255, 0),
        "gray" | "grey" => Rgb8::new(128, 128, 128),
        _ => return None,
    };
    Some(c)
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !hex.is_ascii() {
        return Err(format!("invalid color \"{s}\""));
    }
    match hex.len() {
        6 => Ok(Rgb8::new(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        3 => {
            let nibble = |i: usize| hex_byte(&hex[i..i + 1]).map(|v| v * 17);
            Ok(Rgb8::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => Err(format!(
            "invalid color \"{s}\": expected #RRGGBB, #RGB or a color name"
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
