//! Token assembler: seeds in, complete token bundle out.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::TokenwrightError;
use crate::scale::{generate_color_scale, ColorScale};
use crate::spacing::{generate_spacing_scale, SpacingScale, DEFAULT_BASE_SPACING};
use crate::typography::{generate_typography_scale, TypographyScale, DEFAULT_FONT_FAMILY};

/// Secondary seed used when the caller supplies none.
pub const DEFAULT_SECONDARY_SEED: &str = "#64748b";
pub const NEUTRAL_SEED: &str = "#71717a";
pub const SUCCESS_SEED: &str = "#22c55e";
pub const WARNING_SEED: &str = "#f59e0b";
pub const ERROR_SEED: &str = "#ef4444";

/// Engine input: the designer-supplied seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub base_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TokenConfig {
    pub fn new(primary_color: impl Into<String>) -> Self {
        Self {
            primary_color: primary_color.into(),
            secondary_color: None,
            base_spacing: None,
            font_family: None,
        }
    }
}

/// Whole numbers are written without a fractional part (`4`, not `4.0`).
fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 => {
            serializer.serialize_some(&(v as i64))
        }
        Some(v) => serializer.serialize_some(&v),
        None => serializer.serialize_none(),
    }
}

/// The six color families, user-derived first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
}

impl ColorTokens {
    pub fn entries(&self) -> [(&'static str, &ColorScale); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("neutral", &self.neutral),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    pub full: String,
}

impl BorderRadius {
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("none", self.none.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("full", self.full.as_str()),
        ]
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: "0".into(),
            sm: "0.125rem".into(),
            md: "0.375rem".into(),
            lg: "0.5rem".into(),
            xl: "0.75rem".into(),
            full: "9999px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Shadows {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".into(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1)".into(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1)".into(),
            xl: "0 20px 25px -5px rgb(0 0 0 / 0.1)".into(),
        }
    }
}

/// A complete token bundle for one configuration.
///
/// Built fresh from a [`TokenConfig`]; a changed configuration means a new
/// bundle rather than an edit to this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: ColorTokens,
    pub spacing: SpacingScale,
    pub typography: TypographyScale,
    pub border_radius: BorderRadius,
    pub shadows: Shadows,
}

/// Assemble the bundle.
///
/// Fails atomically: an unparseable primary or secondary seed, or a bad
/// spacing base, returns the error and no bundle.
pub fn generate_design_tokens(config: &TokenConfig) -> Result<DesignTokens, TokenwrightError> {
    let secondary_seed = config
        .secondary_color
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SECONDARY_SEED);
    let base_spacing = config.base_spacing.unwrap_or(DEFAULT_BASE_SPACING);
    let font_family = config.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY);

    tracing::debug!(
        primary = %config.primary_color,
        secondary = %secondary_seed,
        base_spacing,
        font_family,
        "Generating design tokens"
    );

    let colors = ColorTokens {
        primary: generate_color_scale(&config.primary_color)?,
        secondary: generate_color_scale(secondary_seed)?,
        neutral: generate_color_scale(NEUTRAL_SEED)?,
        success: generate_color_scale(SUCCESS_SEED)?,
        warning: generate_color_scale(WARNING_SEED)?,
        error: generate_color_scale(ERROR_SEED)?,
    };

    Ok(DesignTokens {
        colors,
        spacing: generate_spacing_scale(base_spacing)?,
        typography: generate_typography_scale(font_family),
        border_radius: BorderRadius::default(),
        shadows: Shadows::default(),
    })
}
