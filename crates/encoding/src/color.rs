//! RGBA colors and piecewise-linear colormaps.

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with explicit RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|c| c as f64 / 255.0)
        };
        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
}

/// A continuous colormap made of evenly spaced color stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colormap {
    pub name: String,
    pub stops: Vec<Color>,
}

impl Colormap {
    pub fn new(name: impl Into<String>, stops: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Color at normalized position `t`; values outside `[0, 1]` are clamped.
    pub fn sample(&self, t: f64) -> Color {
        match self.stops.len() {
            0 => Color::BLACK,
            1 => self.stops[0],
            n => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let scaled = t * (n - 1) as f64;
                let i = (scaled.floor() as usize).min(n - 2);
                self.stops[i].lerp(self.stops[i + 1], scaled - i as f64)
            }
        }
    }

    /// Perceptually uniform sequential map.
    pub fn viridis() -> Self {
        Self::from_hex_stops(
            "viridis",
            &[
                "#440154", "#472d7b", "#3b528b", "#2c728e", "#21918c", "#28ae80", "#5ec962",
                "#addc30", "#fde725",
            ],
        )
    }

    /// Blue-white-red diverging map, white at the center.
    pub fn bwr() -> Self {
        Self::new("bwr", vec![Color::BLUE, Color::WHITE, Color::RED])
    }

    fn from_hex_stops(name: &str, stops: &[&str]) -> Self {
        Self::new(
            name,
            stops.iter().filter_map(|hex| Color::from_hex(hex)).collect(),
        )
    }
}

/// The twelve-color qualitative palette used for categorical data.
pub fn set3() -> Vec<Color> {
    [
        "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
        "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
    ]
    .iter()
    .filter_map(|hex| Color::from_hex(hex))
    .collect()
}
