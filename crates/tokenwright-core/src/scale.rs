//! 11-step color scales anchored on a seed color.
//!
//! The seed becomes shade 500. Shades 50–400 brighten and 600–950 darken in
//! half-step increments of CIELAB lightness.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::TokenwrightError;

/// Shade keys in ascending order.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Lightness adjustment per shade, aligned with [`SHADES`].
/// Positive values brighten, negative values darken.
const SHADE_STEPS: [f64; 11] = [2.5, 2.0, 1.5, 1.0, 0.5, 0.0, -0.5, -1.0, -1.5, -2.0, -2.5];

/// One color family, lightest (50) to darkest (950), as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
    #[serde(rename = "950")]
    pub shade_950: String,
}

impl ColorScale {
    /// `(shade, hex)` pairs in ascending shade order.
    pub fn entries(&self) -> [(u16, &str); 11] {
        [
            (50, self.shade_50.as_str()),
            (100, self.shade_100.as_str()),
            (200, self.shade_200.as_str()),
            (300, self.shade_300.as_str()),
            (400, self.shade_400.as_str()),
            (500, self.shade_500.as_str()),
            (600, self.shade_600.as_str()),
            (700, self.shade_700.as_str()),
            (800, self.shade_800.as_str()),
            (900, self.shade_900.as_str()),
            (950, self.shade_950.as_str()),
        ]
    }

    /// Look up a shade by key (e.g. `500`).
    pub fn get(&self, shade: u16) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == shade)
            .map(|(_, hex)| hex)
    }
}

/// Derive a full scale from any parseable color.
///
/// Fails with [`TokenwrightError::InvalidColor`] if `base_color` cannot be
/// parsed; no partial scale is ever produced.
pub fn generate_color_scale(base_color: &str) -> Result<ColorScale, TokenwrightError> {
    let base = Rgb::parse(base_color)?;

    let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900, s950] =
        SHADE_STEPS.map(|step| {
            if step == 0.0 {
                base.to_hex()
            } else {
                base.brighten(step).to_hex()
            }
        });

    Ok(ColorScale {
        shade_50: s50,
        shade_100: s100,
        shade_200: s200,
        shade_300: s300,
        shade_400: s400,
        shade_500: s500,
        shade_600: s600,
        shade_700: s700,
        shade_800: s800,
        shade_900: s900,
        shade_950: s950,
    })
}
