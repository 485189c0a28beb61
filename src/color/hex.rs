use std::fmt;

use crate::foundation::error::{AquariumError, AquariumResult};

/// An opaque sRGB color parsed from `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional, hex digits are case-insensitive).
    pub fn parse(s: &str) -> AquariumResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AquariumError::invalid_color(format!(
                "expected #RRGGBB, got \"{s}\""
            )));
        }

        fn channel(pair: &str) -> AquariumResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| AquariumError::invalid_color(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        })
    }

    /// Shift every channel up by `round(2.55 * percent)`, saturating at 255.
    pub fn lighten(self, percent: f64) -> Self {
        self.shift(percent_amount(percent))
    }

    /// Shift every channel down by `round(2.55 * percent)`, saturating at 0.
    pub fn darken(self, percent: f64) -> Self {
        self.shift(-percent_amount(percent))
    }

    /// CSS `rgba(r, g, b, alpha)` string. `alpha` is passed through unclamped.
    pub fn with_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    fn shift(self, amount: i32) -> Self {
        fn clamp(c: u8, amount: i32) -> u8 {
            (i32::from(c) + amount).clamp(0, 255) as u8
        }
        Self {
            r: clamp(self.r, amount),
            g: clamp(self.g, amount),
            b: clamp(self.b, amount),
        }
    }
}

fn percent_amount(percent: f64) -> i32 {
    let amt = (2.55 * percent).round();
    if amt.is_finite() {
        amt.clamp(-255.0, 255.0) as i32
    } else {
        0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = AquariumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lighten a `#RRGGBB` string by `percent` (0..100).
pub fn lighten(hex: &str, percent: f64) -> AquariumResult<String> {
    Ok(Rgb::parse(hex)?.lighten(percent).to_string())
}

/// Darken a `#RRGGBB` string by `percent` (0..100).
pub fn darken(hex: &str, percent: f64) -> AquariumResult<String> {
    Ok(Rgb::parse(hex)?.darken(percent).to_string())
}

/// Convert a `#RRGGBB` string into `rgba(r, g, b, alpha)`.
pub fn with_alpha(hex: &str, alpha: f64) -> AquariumResult<String> {
    Ok(Rgb::parse(hex)?.with_alpha(alpha))
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
