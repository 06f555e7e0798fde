/// Curated web fonts offered as body/heading choices.
pub const POPULAR_FONTS: &[&str] = &[
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Poppins",
    "Raleway",
    "Nunito",
    "Playfair Display",
    "Merriweather",
    "Libre Baskerville",
    "Source Serif Pro",
    "Work Sans",
    "DM Sans",
    "Plus Jakarta Sans",
    "Manrope",
    "Space Grotesk",
    "Crimson Text",
    "Lora",
    "PT Serif",
    "Spectral",
    "Outfit",
    "Sora",
];

/// Fallbacks appended after a bare family name.
pub const FALLBACK_STACK: &str = "system-ui, sans-serif";

/// Case-insensitive substring search over [`POPULAR_FONTS`].
/// An empty (or all-whitespace) query returns the full list.
pub fn search_fonts(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    POPULAR_FONTS
        .iter()
        .copied()
        .filter(|font| needle.is_empty() || font.to_lowercase().contains(&needle))
        .collect()
}

/// `"Lora"` → `"Lora, system-ui, sans-serif"`.
pub fn font_stack(family: &str) -> String {
    format!("{family}, {FALLBACK_STACK}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_all() {
        assert_eq!(search_fonts("").len(), POPULAR_FONTS.len());
        assert_eq!(search_fonts("   ").len(), POPULAR_FONTS.len());
    }

    #[test]
    fn test_search_case_insensitive() {
        assert_eq!(
            search_fonts("SANS"),
            vec!["Open Sans", "Work Sans", "DM Sans", "Plus Jakarta Sans"]
        );
        assert_eq!(search_fonts("serif"), vec!["Source Serif Pro", "PT Serif"]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_fonts("comic").is_empty());
    }

    #[test]
    fn test_font_stack() {
        assert_eq!(font_stack("Inter"), "Inter, system-ui, sans-serif");
    }
}
