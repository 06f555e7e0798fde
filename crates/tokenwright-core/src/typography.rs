//! Fixed typographic scale. Only the sans family comes from the caller.

use serde::{Deserialize, Serialize};

/// Sans stack used when the caller supplies none.
pub const DEFAULT_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
pub const SERIF_FAMILY: &str = "Georgia, serif";
pub const MONO_FAMILY: &str = "Menlo, monospace";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyScale {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub line_height: LineHeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

/// Type sizes in rem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSize {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    #[serde(rename = "4xl")]
    pub xl4: String,
    #[serde(rename = "5xl")]
    pub xl5: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeight {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeight {
    pub tight: f64,
    pub normal: f64,
    pub relaxed: f64,
}

impl FontFamily {
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("sans", self.sans.as_str()),
            ("serif", self.serif.as_str()),
            ("mono", self.mono.as_str()),
        ]
    }
}

impl FontSize {
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("base", self.base.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("2xl", self.xl2.as_str()),
            ("3xl", self.xl3.as_str()),
            ("4xl", self.xl4.as_str()),
            ("5xl", self.xl5.as_str()),
        ]
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self {
            xs: "0.75rem".into(),
            sm: "0.875rem".into(),
            base: "1rem".into(),
            lg: "1.125rem".into(),
            xl: "1.25rem".into(),
            xl2: "1.5rem".into(),
            xl3: "1.875rem".into(),
            xl4: "2.25rem".into(),
            xl5: "3rem".into(),
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self {
            light: 300,
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

impl Default for LineHeight {
    fn default() -> Self {
        Self {
            tight: 1.25,
            normal: 1.5,
            relaxed: 1.75,
        }
    }
}

impl Default for TypographyScale {
    fn default() -> Self {
        generate_typography_scale(DEFAULT_FONT_FAMILY)
    }
}

/// Build the typography table with `font_family` as the sans stack, verbatim.
pub fn generate_typography_scale(font_family: &str) -> TypographyScale {
    TypographyScale {
        font_family: FontFamily {
            sans: font_family.to_string(),
            serif: SERIF_FAMILY.to_string(),
            mono: MONO_FAMILY.to_string(),
        },
        font_size: FontSize::default(),
        font_weight: FontWeight::default(),
        line_height: LineHeight::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sans_is_verbatim() {
        for family in ["Inter", "", "  Odd, Stack  ", "Playfair Display, serif"] {
            let scale = generate_typography_scale(family);
            assert_eq!(scale.font_family.sans, family);
        }
    }

    #[test]
    fn test_default_family() {
        let scale = TypographyScale::default();
        assert_eq!(scale.font_family.sans, DEFAULT_FONT_FAMILY);
        assert_eq!(scale.font_family.serif, "Georgia, serif");
        assert_eq!(scale.font_family.mono, "Menlo, monospace");
    }

    #[test]
    fn test_fixed_tables_ignore_input() {
        let a = generate_typography_scale("Inter");
        let b = generate_typography_scale("Lora");
        assert_eq!(a.font_size, b.font_size);
        assert_eq!(a.font_weight, b.font_weight);
        assert_eq!(a.line_height, b.line_height);
        assert_eq!(a.font_size.base, "1rem");
        assert_eq!(a.font_size.xl5, "3rem");
        assert_eq!(a.font_weight.semibold, 600);
        assert_eq!(a.line_height.relaxed, 1.75);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(TypographyScale::default()).unwrap();
        assert_eq!(json["fontFamily"]["mono"], "Menlo, monospace");
        assert_eq!(json["fontSize"]["2xl"], "1.5rem");
        assert_eq!(json["fontWeight"]["bold"], 700);
        assert_eq!(json["lineHeight"]["tight"], 1.25);
    }
}
