/// The two typefaces invoice templates draw with. Both are standard
/// PDF fonts, available in every viewer without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PDF resource name used in content streams.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// PDF BaseFont name.
    pub fn pdf_base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// Character widths for Helvetica (ASCII 32..=126) in units of 1/1000 em.
/// Source: Adobe Helvetica AFM data.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32..47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 48..63
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 64..79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 80..95
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 96..111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 112..126
];

/// Character widths for Helvetica-Bold (ASCII 32..=126) in 1/1000 em.
/// Source: Adobe Helvetica-Bold AFM data.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32..47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 48..63
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 64..79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 80..95
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 96..111
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 112..126
];

/// Width used for code points outside the mapped ASCII range.
const DEFAULT_WIDTH: u16 = 278;

/// Points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Width of one character in 1/1000 em units.
pub fn char_width(font: Font, ch: char) -> u16 {
    let code = ch as u32;
    if !(32..=126).contains(&code) {
        return DEFAULT_WIDTH;
    }
    let index = (code - 32) as usize;
    match font {
        Font::Helvetica => HELVETICA_WIDTHS[index],
        Font::HelveticaBold => HELVETICA_BOLD_WIDTHS[index],
    }
}

/// Width of a string in points at the given font size.
pub fn measure_pt(text: &str, font: Font, font_size: f64) -> f64 {
    let total: u32 = text.chars().map(|ch| char_width(font, ch) as u32).sum();
    total as f64 * font_size / 1000.0
}

/// Width of a string in millimetres at the given font size (size in points,
/// as the drawing surface uses millimetre coordinates but point-sized type).
pub fn measure_mm(text: &str, font: Font, font_size: f64) -> f64 {
    measure_pt(text, font, font_size) / PT_PER_MM
}
