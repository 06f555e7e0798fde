//! Text serializers for a token bundle.
//!
//! Output is byte-stable: properties and keys are emitted in bundle field
//! order so exports can be diffed textually.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenwrightError;
use crate::tokens::{DesignTokens, TokenConfig};

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    /// Conventional file name for the exported text.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Css => "design-tokens.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Json => "design-system.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = TokenwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| TokenwrightError::UnknownFormat(s.to_string()))
    }
}

/// Exported text paired with the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    pub filename: String,
    pub content: String,
}

/// Render `tokens` in the requested format.
pub fn export(
    format: ExportFormat,
    config: &TokenConfig,
    tokens: &DesignTokens,
) -> Result<Export, TokenwrightError> {
    let content = match format {
        ExportFormat::Css => export_to_css_variables(tokens),
        ExportFormat::Tailwind => export_to_tailwind_config(tokens),
        ExportFormat::Json => export_to_json(config, tokens)?,
    };
    tracing::debug!(format = %format, bytes = content.len(), "Exported tokens");
    Ok(Export {
        filename: format.filename().to_string(),
        content,
    })
}

/// One `:root` block of custom properties.
///
/// Order: colors (primary → error, ascending shade), spacing, font
/// families, font sizes, radii, shadows.
pub fn export_to_css_variables(tokens: &DesignTokens) -> String {
    let mut css = String::from(":root {\n");

    for (name, scale) in tokens.colors.entries() {
        for (shade, value) in scale.entries() {
            declare(&mut css, &format!("color-{name}-{shade}"), value);
        }
    }

    for (key, value) in tokens.spacing.entries() {
        declare(&mut css, &format!("spacing-{key}"), value);
    }

    for (key, value) in tokens.typography.font_family.entries() {
        declare(&mut css, &format!("font-{key}"), value);
    }

    for (key, value) in tokens.typography.font_size.entries() {
        declare(&mut css, &format!("text-{key}"), value);
    }

    for (key, value) in tokens.border_radius.entries() {
        declare(&mut css, &format!("radius-{key}"), value);
    }

    for (key, value) in tokens.shadows.entries() {
        declare(&mut css, &format!("shadow-{key}"), value);
    }

    css.push_str("}\n");
    css
}

fn declare(css: &mut String, property: &str, value: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(css, "  --{property}: {value};");
}

/// A CommonJS Tailwind config extending the theme with the bundle.
pub fn export_to_tailwind_config(tokens: &DesignTokens) -> String {
    format!(
        "/** @type {{import('tailwindcss').Config}} */
module.exports = {{
  theme: {{
    extend: {{
      colors: {colors},
      spacing: {spacing},
      fontFamily: {font_family},
      fontSize: {font_size},
      borderRadius: {border_radius},
      boxShadow: {box_shadow},
    }},
  }},
}};",
        colors = pretty(&tokens.colors),
        spacing = pretty(&tokens.spacing),
        font_family = pretty(&tokens.typography.font_family),
        font_size = pretty(&tokens.typography.font_size),
        border_radius = pretty(&tokens.border_radius),
        box_shadow = pretty(&tokens.shadows),
    )
}

/// Pretty JSON with 2-space indentation.
fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
struct JsonExport<'a> {
    config: &'a TokenConfig,
    tokens: &'a DesignTokens,
}

/// `{ "config": ..., "tokens": ... }`, pretty-printed.
pub fn export_to_json(
    config: &TokenConfig,
    tokens: &DesignTokens,
) -> Result<String, TokenwrightError> {
    Ok(serde_json::to_string_pretty(&JsonExport { config, tokens })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::generate_design_tokens;

    fn indigo() -> (TokenConfig, DesignTokens) {
        let config = TokenConfig {
            primary_color: "#6366f1".into(),
            secondary_color: None,
            base_spacing: Some(4.0),
            font_family: Some("Inter".into()),
        };
        let tokens = generate_design_tokens(&config).unwrap();
        (config, tokens)
    }

    fn declarations(css: &str) -> Vec<(&str, &str)> {
        css.lines()
            .filter_map(|line| line.trim().strip_prefix("--"))
            .filter_map(|decl| decl.strip_suffix(';'))
            .filter_map(|decl| decl.split_once(": "))
            .collect()
    }

    #[test]
    fn test_css_scenario_lines() {
        let (_, tokens) = indigo();
        let css = export_to_css_variables(&tokens);
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --spacing-md: 16px;\n"));
        assert!(css.contains("  --color-primary-500: #6366f1;\n"));
        assert!(css.contains("  --font-sans: Inter;\n"));
        assert!(css.contains("  --font-serif: Georgia, serif;\n"));
        assert!(css.contains("  --text-2xl: 1.5rem;\n"));
        assert!(css.contains("  --radius-none: 0;\n"));
        assert!(css.contains("  --shadow-xl: 0 20px 25px -5px rgb(0 0 0 / 0.1);\n"));
    }

    #[test]
    fn test_css_one_line_per_leaf() {
        let (_, tokens) = indigo();
        let css = export_to_css_variables(&tokens);
        let decls = declarations(&css);
        // 6 scales * 11 shades + 8 spacing + 3 families + 9 sizes + 6 radii + 4 shadows
        assert_eq!(decls.len(), 66 + 8 + 3 + 9 + 6 + 4);
        assert_eq!(css.lines().count(), decls.len() + 2);

        let mut names: Vec<&str> = decls.iter().map(|(name, _)| *name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate property names");
    }

    #[test]
    fn test_css_property_names_recover_keys() {
        let (_, tokens) = indigo();
        let css = export_to_css_variables(&tokens);
        let decls = declarations(&css);

        let mut expected = Vec::new();
        for (name, scale) in tokens.colors.entries() {
            for (shade, value) in scale.entries() {
                expected.push((format!("color-{name}-{shade}"), value.to_string()));
            }
        }
        for (key, value) in tokens.spacing.entries() {
            expected.push((format!("spacing-{key}"), value.to_string()));
        }
        let got: Vec<(String, String)> = decls
            .iter()
            .take(expected.len())
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_css_section_order() {
        let (_, tokens) = indigo();
        let css = export_to_css_variables(&tokens);
        let first = |prefix: &str| css.find(prefix).unwrap();
        let order = [
            "--color-primary-50:",
            "--color-secondary-50:",
            "--color-neutral-50:",
            "--color-success-50:",
            "--color-warning-50:",
            "--color-error-50:",
            "--spacing-xs:",
            "--font-sans:",
            "--font-serif:",
            "--font-mono:",
            "--text-xs:",
            "--radius-none:",
            "--shadow-sm:",
        ];
        let positions: Vec<usize> = order.iter().map(|p| first(*p)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_css_deterministic() {
        let (_, a) = indigo();
        let (_, b) = indigo();
        assert_eq!(export_to_css_variables(&a), export_to_css_variables(&b));
    }

    #[test]
    fn test_tailwind_shape() {
        let (_, tokens) = indigo();
        let config = export_to_tailwind_config(&tokens);
        assert!(config
            .starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {\n"));
        assert!(config.ends_with("    },\n  },\n};"));
        for field in ["colors", "spacing", "fontFamily", "fontSize", "borderRadius", "boxShadow"] {
            assert!(
                config.contains(&format!("      {field}: {{\n")),
                "missing field {field}"
            );
        }
        assert!(config.contains("      spacing: {\n  \"xs\": \"4px\",\n"));
        assert!(config.contains("    \"500\": \"#6366f1\",\n"));
        assert!(config.contains("\"sans\": \"Inter\""));
        // Weights and line heights are not part of the Tailwind extension.
        assert!(!config.contains("fontWeight"));
        assert!(!config.contains("lineHeight"));
    }

    #[test]
    fn test_tailwind_field_order() {
        let (_, tokens) = indigo();
        let config = export_to_tailwind_config(&tokens);
        let positions: Vec<usize> = [
            "colors:",
            "spacing:",
            "fontFamily:",
            "fontSize:",
            "borderRadius:",
            "boxShadow:",
        ]
        .iter()
        .map(|f| config.find(f).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_export() {
        let (config, tokens) = indigo();
        let json = export_to_json(&config, &tokens).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["primaryColor"], "#6366f1");
        assert_eq!(value["config"]["baseSpacing"], 4);
        assert!(json.contains("\"baseSpacing\": 4,\n"));
        assert!(value["config"].get("secondaryColor").is_none());
        assert_eq!(value["tokens"]["colors"]["primary"]["500"], "#6366f1");
        assert_eq!(value["tokens"]["spacing"]["md"], "16px");
        assert!(json.contains("\n  \"tokens\": {\n"));
    }

    #[test]
    fn test_export_dispatch() {
        let (config, tokens) = indigo();
        for format in ExportFormat::ALL {
            let out = export(format, &config, &tokens).unwrap();
            assert_eq!(out.filename, format.filename());
            assert!(!out.content.is_empty());
        }
        let css = export(ExportFormat::Css, &config, &tokens).unwrap();
        assert_eq!(css.content, export_to_css_variables(&tokens));
        assert_eq!(css.filename, "design-tokens.css");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!("Tailwind".parse::<ExportFormat>().unwrap(), ExportFormat::Tailwind);
        assert_eq!(" JSON ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(TokenwrightError::UnknownFormat(_))
        ));
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }
}
