use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// An RGB color parsed from a strict 6-hex-digit `#RRGGBB` literal.
///
/// Fill shades are derived from one base color; empty-cell colors are
/// separate per-policy literals and never pass through here (one of them
/// carries an alpha channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` literal. Anything else — missing hash, wrong
    /// length, alpha suffix, non-hex digits — is `InvalidColor`.
    pub fn parse(literal: &str) -> Result<Self, GraphError> {
        let hex = literal
            .strip_prefix('#')
            .ok_or_else(|| GraphError::InvalidColor(literal.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GraphError::InvalidColor(literal.to_string()));
        }
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|_| GraphError::InvalidColor(literal.to_string()))?;
        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    /// Shade toward black (`percent < 0`) or white (`percent > 0`):
    /// each channel moves linearly toward the target by `|percent|`,
    /// rounded to the nearest integer.
    #[must_use]
    pub fn shade(&self, percent: f64) -> Rgb {
        let target = if percent < 0.0 { 0.0 } else { 255.0 };
        let p = percent.abs();
        let mix = |channel: u8| -> u8 {
            ((target - f64::from(channel)) * p + f64::from(channel)).round() as u8
        };
        Rgb {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }

    /// Lowercase `#rrggbb` form, the shape the draw surface expects.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
