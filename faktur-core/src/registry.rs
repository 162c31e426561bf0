//! Template catalog and lookup.
//!
//! Identifiers are stable wire strings. Unknown identifiers resolve to
//! the default theme rather than failing, so a stale or mistyped id in
//! stored invoice data still produces a document.

use serde::{Deserialize, Serialize};

use crate::template::Template;
use crate::templates::{ClassicMinimal, CreativeColorful, ModernBlue, ProfessionalDark};

/// Identifier for one of the built-in invoice themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateId {
    ModernBlue,
    ClassicMinimal,
    ProfessionalDark,
    CreativeColorful,
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::ModernBlue
    }
}

impl TemplateId {
    /// The wire string stored in invoice records.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ModernBlue => "MODERN_BLUE",
            TemplateId::ClassicMinimal => "CLASSIC_MINIMAL",
            TemplateId::ProfessionalDark => "PROFESSIONAL_DARK",
            TemplateId::CreativeColorful => "CREATIVE_COLORFUL",
        }
    }

    /// Parses a wire string, falling back to the default theme for
    /// anything unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "MODERN_BLUE" => TemplateId::ModernBlue,
            "CLASSIC_MINIMAL" => TemplateId::ClassicMinimal,
            "PROFESSIONAL_DARK" => TemplateId::ProfessionalDark,
            "CREATIVE_COLORFUL" => TemplateId::CreativeColorful,
            _ => TemplateId::default(),
        }
    }
}

/// Instantiates the renderer for a theme.
pub fn create_template(id: TemplateId) -> Box<dyn Template> {
    match id {
        TemplateId::ModernBlue => Box::new(ModernBlue),
        TemplateId::ClassicMinimal => Box::new(ClassicMinimal),
        TemplateId::ProfessionalDark => Box::new(ProfessionalDark),
        TemplateId::CreativeColorful => Box::new(CreativeColorful),
    }
}

/// Catalog metadata for a theme, for listing in a picker UI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const CATALOG: [TemplateInfo; 4] = [
    TemplateInfo {
        id: TemplateId::ModernBlue,
        name: "Modern Blue",
        description: "Template modern dengan aksen biru yang profesional dan clean",
        features: &[
            "Header biru elegant",
            "Layout terstruktur",
            "Alternating row colors",
            "Professional footer",
        ],
    },
    TemplateInfo {
        id: TemplateId::ClassicMinimal,
        name: "Classic Minimal",
        description: "Template klasik minimalis dengan desain yang bersih dan sederhana",
        features: &[
            "Desain minimalis",
            "Typography klasik",
            "Layout sederhana",
            "Fokus pada konten",
        ],
    },
    TemplateInfo {
        id: TemplateId::ProfessionalDark,
        name: "Professional Dark",
        description: "Template profesional dengan tema gelap dan aksen merah",
        features: &[
            "Dark theme",
            "Red accent colors",
            "Corporate look",
            "Premium feel",
        ],
    },
    TemplateInfo {
        id: TemplateId::CreativeColorful,
        name: "Creative Colorful",
        description: "Template kreatif dengan warna-warna cerah dan elemen visual menarik",
        features: &[
            "Rainbow colors",
            "Creative elements",
            "Emoji icons",
            "Fun design",
        ],
    },
];

/// All built-in themes, in presentation order. The first entry is the
/// default.
pub fn available_templates() -> &'static [TemplateInfo] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_strings_round_trip() {
        for info in available_templates() {
            assert_eq!(TemplateId::parse_or_default(info.id.as_str()), info.id);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        assert_eq!(
            TemplateId::parse_or_default("NOT_A_REAL_ID"),
            TemplateId::ModernBlue
        );
        assert_eq!(TemplateId::parse_or_default(""), TemplateId::ModernBlue);
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&TemplateId::ProfessionalDark).unwrap();
        assert_eq!(json, "\"PROFESSIONAL_DARK\"");
        let back: TemplateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TemplateId::ProfessionalDark);
    }

    #[test]
    fn catalog_lists_every_theme_once() {
        let ids: Vec<_> = available_templates().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                TemplateId::ModernBlue,
                TemplateId::ClassicMinimal,
                TemplateId::ProfessionalDark,
                TemplateId::CreativeColorful,
            ]
        );
        assert_eq!(ids[0], TemplateId::default());
    }
}
