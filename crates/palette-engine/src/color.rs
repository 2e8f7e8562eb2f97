use palette::{FromColor, LinSrgb, Srgb};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
///
/// Achromatic colors report a hue of `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Parses `#rrggbb` or `#rgb`, case-insensitively. The leading `#` is
    /// optional since palette feeds usually leave it out.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(input.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(Error::InvalidColor(input.to_string())),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(input.to_string()))
        };

        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hsl = palette::Hsl::<palette::encoding::Srgb, f64>::new(
            hue.rem_euclid(360.0),
            saturation.clamp(0.0, 1.0),
            lightness.clamp(0.0, 1.0),
        );
        let rgb: Srgb<u8> = Srgb::<f64>::from_color(hsl).into_format();

        Color::new(rgb.red, rgb.green, rgb.blue)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    pub fn hsl(&self) -> Hsl {
        let hsl = palette::Hsl::<palette::encoding::Srgb, f64>::from_color(self.srgb());
        let hue = hsl.hue.into_positive_degrees();

        Hsl {
            hue: if hue.is_nan() { 0.0 } else { hue % 360.0 },
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// WCAG relative luminance, `0.0` for black up to `1.0` for white.
    pub fn luminance(&self) -> f64 {
        let linear: LinSrgb<f64> = self.srgb().into_linear();

        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    fn srgb(&self) -> Srgb<f64> {
        Srgb::new(self.red, self.green, self.blue).into_format()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

pub fn is_valid_hex(input: &str) -> bool {
    Color::parse(input).is_ok()
}

/// WCAG contrast ratio between two colors, from `1.0` up to `21.0`.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let (la, lb) = (a.luminance(), b.luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };

    (lighter + 0.05) / (darker + 0.05)
}
