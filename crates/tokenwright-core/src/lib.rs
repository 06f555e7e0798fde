//! Design-token derivation engine.
//!
//! Turns a handful of seed values (two brand colors, a spacing unit, a font
//! family) into a complete, deterministic token bundle and serializes it as
//! CSS custom properties, a Tailwind config module, or JSON.

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod fonts;
pub mod named;
pub mod scale;
pub mod spacing;
pub mod tokens;
pub mod typography;

pub use error::TokenwrightError;
pub use export::{
    export, export_to_css_variables, export_to_json, export_to_tailwind_config, Export, ExportFormat,
};
pub use scale::{generate_color_scale, ColorScale};
pub use spacing::{generate_spacing_scale, SpacingScale};
pub use tokens::{generate_design_tokens, DesignTokens, TokenConfig};
pub use typography::{generate_typography_scale, TypographyScale};
