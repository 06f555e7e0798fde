use serde::{Deserialize, Serialize};

use crate::error::TokenwrightError;

/// Default base unit in pixels.
pub const DEFAULT_BASE_SPACING: f64 = 4.0;

/// Fixed multiples of the base unit, in key order.
pub const SPACING_MULTIPLIERS: [(&str, u32); 8] = [
    ("xs", 1),
    ("sm", 2),
    ("md", 4),
    ("lg", 6),
    ("xl", 8),
    ("2xl", 12),
    ("3xl", 16),
    ("4xl", 24),
];

const MAX_MULTIPLIER: u32 = SPACING_MULTIPLIERS[SPACING_MULTIPLIERS.len() - 1].1;

/// Eight pixel lengths, each a fixed multiple of one base unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    #[serde(rename = "4xl")]
    pub xl4: String,
}

impl SpacingScale {
    /// `(key, length)` pairs in ascending order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("2xl", self.xl2.as_str()),
            ("3xl", self.xl3.as_str()),
            ("4xl", self.xl4.as_str()),
        ]
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        build(DEFAULT_BASE_SPACING)
    }
}

/// Multiply `base_unit_px` through the fixed table.
///
/// Non-finite and non-positive bases, and bases whose largest multiple
/// overflows, are rejected with [`TokenwrightError::InvalidArgument`].
pub fn generate_spacing_scale(base_unit_px: f64) -> Result<SpacingScale, TokenwrightError> {
    if !base_unit_px.is_finite() || base_unit_px <= 0.0 {
        return Err(TokenwrightError::InvalidArgument(format!(
            "base spacing must be a positive number, got {base_unit_px}"
        )));
    }
    if !(base_unit_px * MAX_MULTIPLIER as f64).is_finite() {
        return Err(TokenwrightError::InvalidArgument(format!(
            "base spacing {base_unit_px} is too large"
        )));
    }
    Ok(build(base_unit_px))
}

fn build(base: f64) -> SpacingScale {
    let [xs, sm, md, lg, xl, xl2, xl3, xl4] =
        SPACING_MULTIPLIERS.map(|(_, multiplier)| px(base * multiplier as f64));
    SpacingScale {
        xs,
        sm,
        md,
        lg,
        xl,
        xl2,
        xl3,
        xl4,
    }
}

/// `16.0` → `"16px"`, `2.5` → `"2.5px"`.
fn px(value: f64) -> String {
    format!("{value}px")
}
