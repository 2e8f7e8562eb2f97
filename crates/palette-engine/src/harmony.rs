//! Color harmonies built by rotating the hue of a base color.

use crate::color::Color;
use crate::Result;

const ANALOGOUS_STEP: f64 = 30.0;

fn rotate(color: &Color, degrees: f64) -> String {
    let hsl = color.hsl();
    Color::from_hsl(hsl.hue + degrees, hsl.saturation, hsl.lightness).to_hex()
}

/// `[base, base + 180°]`.
pub fn complementary(base: &str) -> Result<Vec<String>> {
    let color = Color::parse(base)?;
    Ok(vec![base.to_string(), rotate(&color, 180.0)])
}

/// `[base, base + 120°, base + 240°]`.
pub fn triadic(base: &str) -> Result<Vec<String>> {
    let color = Color::parse(base)?;
    Ok(vec![
        base.to_string(),
        rotate(&color, 120.0),
        rotate(&color, 240.0),
    ])
}

/// `count` colors fanning out from the base in 30° steps, alternating
/// clockwise and counter-clockwise: `+30, -30, +60, -60, ...`.
pub fn analogous(base: &str, count: usize) -> Result<Vec<String>> {
    let color = Color::parse(base)?;
    let mut colors = vec![base.to_string()];

    for i in 1..count {
        let direction = if i % 2 == 1 { 1.0 } else { -1.0 };
        let steps = i.div_ceil(2) as f64;
        colors.push(rotate(&color, direction * steps * ANALOGOUS_STEP));
    }

    Ok(colors)
}
