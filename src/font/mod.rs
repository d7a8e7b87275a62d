//! # Font Management
//!
//! Text measurement against the standard PDF fonts (Helvetica, Times,
//! Courier), which need no embedding. Every query takes the full
//! [`FontState`]; there is no "current font" to fall out of sync.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use crate::model::{FontState, FontStyle, MM_PER_PT};
use std::collections::HashMap;

/// The standard PDF faces the generator can draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    Courier,
    CourierBold,
    CourierOblique,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        match self {
            Self::Helvetica | Self::HelveticaOblique => &metrics::HELVETICA,
            Self::HelveticaBold => &metrics::HELVETICA_BOLD,
            Self::TimesRoman => &metrics::TIMES_ROMAN,
            Self::TimesBold => &metrics::TIMES_BOLD,
            Self::TimesItalic => &metrics::TIMES_ITALIC,
            Self::Courier | Self::CourierBold | Self::CourierOblique => &metrics::COURIER,
        }
    }
}

/// Maps (family, style) to a standard face. Family names are matched
/// case-insensitively and a few common aliases are accepted.
pub struct FontRegistry {
    fonts: HashMap<(String, FontStyle), StandardFont>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    pub fn new() -> Self {
        let standard_mappings = [
            (("helvetica", FontStyle::Normal), StandardFont::Helvetica),
            (("helvetica", FontStyle::Bold), StandardFont::HelveticaBold),
            (("helvetica", FontStyle::Italic), StandardFont::HelveticaOblique),
            (("times", FontStyle::Normal), StandardFont::TimesRoman),
            (("times", FontStyle::Bold), StandardFont::TimesBold),
            (("times", FontStyle::Italic), StandardFont::TimesItalic),
            (("courier", FontStyle::Normal), StandardFont::Courier),
            (("courier", FontStyle::Bold), StandardFont::CourierBold),
            (("courier", FontStyle::Italic), StandardFont::CourierOblique),
        ];

        let fonts = standard_mappings
            .into_iter()
            .map(|((family, style), font)| ((family.to_string(), style), font))
            .collect();

        Self { fonts }
    }

    /// Look up a face, falling back to Helvetica for unknown families.
    pub fn resolve(&self, family: &str, style: FontStyle) -> StandardFont {
        let family = canonical_family(family);
        self.fonts
            .get(&(family.to_string(), style))
            .or_else(|| self.fonts.get(&("helvetica".to_string(), style)))
            .copied()
            .unwrap_or(StandardFont::Helvetica)
    }
}

fn canonical_family(family: &str) -> &'static str {
    match family.trim().to_ascii_lowercase().as_str() {
        "times" | "times-roman" | "times new roman" | "serif" => "times",
        "courier" | "courier new" | "monospace" => "courier",
        _ => "helvetica",
    }
}

/// Shared font context used by layout and PDF serialization.
pub struct FontContext {
    registry: FontRegistry,
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FontContext {
    pub fn new() -> Self {
        Self {
            registry: FontRegistry::new(),
        }
    }

    /// Resolve a font state to the face that draws it.
    pub fn resolve(&self, font: &FontState) -> StandardFont {
        self.registry.resolve(&font.family, font.style)
    }

    /// Rendered width of `text` in layout units. Empty text is 0.
    pub fn measure(&self, text: &str, font: &FontState) -> f64 {
        let points = self.resolve(font).metrics().measure_string(text, font.size);
        points * MM_PER_PT
    }

    /// Advance width of a single character in layout units.
    pub fn char_width(&self, ch: char, font: &FontState) -> f64 {
        self.resolve(font).metrics().char_width(ch, font.size) * MM_PER_PT
    }

    /// Access the underlying font registry.
    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        let ctx = FontContext::new();
        assert_eq!(ctx.measure("", &FontState::times(12.0)), 0.0);
    }

    #[test]
    fn test_measure_in_millimetres() {
        let ctx = FontContext::new();
        // Helvetica space is 278/1000 em; at 12pt that's 3.336pt.
        let w = ctx.measure(" ", &FontState::helvetica(12.0));
        assert!((w - 3.336 * MM_PER_PT).abs() < 1e-9);
    }

    #[test]
    fn test_measure_matches_drawn_glyph() {
        let ctx = FontContext::new();
        let times = FontState::times(12.0);
        let quote = ctx.measure("\u{2019}", &times) / MM_PER_PT / 12.0 * 1000.0;
        assert!((quote - 333.0).abs() < 1e-6, "quoteright measured {}", quote);
        assert_eq!(ctx.measure("Jos\u{e9}", &times), ctx.measure("Jose", &times));
        assert_eq!(ctx.measure("\u{0B85}", &times), ctx.measure("?", &times));
    }

    #[test]
    fn test_bold_wider() {
        let ctx = FontContext::new();
        let regular = ctx.measure("Versus", &FontState::helvetica(12.0));
        let bold = ctx.measure("Versus", &FontState::new("Helvetica", FontStyle::Bold, 12.0));
        assert!(bold > regular, "Bold text should be wider than regular");
    }

    #[test]
    fn test_width_tracks_size() {
        let ctx = FontContext::new();
        let small = ctx.measure("Affidavit", &FontState::times(12.0));
        let large = ctx.measure("Affidavit", &FontState::times(24.0));
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn test_family_aliases() {
        let reg = FontRegistry::new();
        assert_eq!(reg.resolve("times", FontStyle::Bold), StandardFont::TimesBold);
        assert_eq!(reg.resolve("Times New Roman", FontStyle::Normal), StandardFont::TimesRoman);
        assert_eq!(reg.resolve("monospace", FontStyle::Italic), StandardFont::CourierOblique);
    }

    #[test]
    fn test_unknown_family_falls_back_to_helvetica() {
        let ctx = FontContext::new();
        let a = ctx.measure("A", &FontState::new("Comic Sans", FontStyle::Normal, 12.0));
        let b = ctx.measure("A", &FontState::helvetica(12.0));
        assert!((a - b).abs() < 1e-9);
    }
}
