use std::io;

use crate::fonts::{self, Font, PT_PER_MM};
use crate::writer::{escape_pdf_string, fmt_num, serialize_page};

/// RGB color, each component 0.0 (none) to 1.0 (full intensity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a color from components in the 0.0–1.0 range.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// Create a color from 8-bit components, as theme palettes specify them.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill,
    Stroke,
    FillStroke,
}

/// A4 page size in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// One-page drawing canvas for invoice rendering.
///
/// Coordinates are millimetres with the origin at the top-left corner, the
/// convention all template geometry is written in; ops are converted to PDF
/// points (bottom-left origin) as they are emitted. Text, fill, and stroke
/// colors are tracked separately, along with the current font and point
/// size, mirroring the state model templates mutate step by step.
///
/// The surface is exclusively owned by one render: it accumulates content
/// ops and is consumed by [`Surface::finish`].
pub struct Surface {
    width_mm: f64,
    height_mm: f64,
    ops: Vec<u8>,
    font: Font,
    font_size: f64,
    text_color: Color,
    fill_color: Color,
    draw_color: Color,
    line_width_mm: f64,
    compress: bool,
    info: Vec<(String, String)>,
}

impl Surface {
    /// Create an A4 portrait surface with 12pt Helvetica and black colors.
    pub fn a4() -> Self {
        Surface {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            ops: Vec::new(),
            font: Font::Helvetica,
            font_size: 12.0,
            text_color: Color::BLACK,
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
            line_width_mm: 0.2,
            compress: false,
            info: Vec::new(),
        }
    }

    /// Enable or disable FlateDecode compression of the content stream.
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Set a document info entry (e.g. "Title", "Creator").
    pub fn set_info(&mut self, key: &str, value: &str) {
        self.info.push((key.to_string(), value.to_string()));
    }

    // ---- drawing state ----

    pub fn set_font(&mut self, font: Font, size_pt: f64) {
        self.font = font;
        self.font_size = size_pt;
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn set_line_width(&mut self, width_mm: f64) {
        self.line_width_mm = width_mm;
    }

    // ---- measurement ----

    /// Width of `text` in millimetres with the current font and size.
    pub fn text_width(&self, text: &str) -> f64 {
        fonts::measure_mm(text, self.font, self.font_size)
    }

    // ---- ops ----

    /// Draw a rectangle whose top-left corner is at (x, y) mm.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint) {
        let px = x * PT_PER_MM;
        let py = (self.height_mm - y - h) * PT_PER_MM;
        let pw = w * PT_PER_MM;
        let ph = h * PT_PER_MM;

        match paint {
            Paint::Fill => {
                self.emit_fill_color();
                self.push_op(format!(
                    "{} {} {} {} re\nf\n",
                    fmt_num(px),
                    fmt_num(py),
                    fmt_num(pw),
                    fmt_num(ph)
                ));
            }
            Paint::Stroke => {
                self.emit_stroke_state();
                self.push_op(format!(
                    "{} {} {} {} re\nS\n",
                    fmt_num(px),
                    fmt_num(py),
                    fmt_num(pw),
                    fmt_num(ph)
                ));
            }
            Paint::FillStroke => {
                self.emit_fill_color();
                self.emit_stroke_state();
                self.push_op(format!(
                    "{} {} {} {} re\nB\n",
                    fmt_num(px),
                    fmt_num(py),
                    fmt_num(pw),
                    fmt_num(ph)
                ));
            }
        }
    }

    /// Draw a straight line between two points given in mm.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.emit_stroke_state();
        self.push_op(format!(
            "{} {} m\n{} {} l\nS\n",
            fmt_num(x1 * PT_PER_MM),
            fmt_num((self.height_mm - y1) * PT_PER_MM),
            fmt_num(x2 * PT_PER_MM),
            fmt_num((self.height_mm - y2) * PT_PER_MM),
        ));
    }

    /// Place text with its baseline at (x, y) mm, using the current font,
    /// size, and text color.
    pub fn text(&mut self, text: &str, x: f64, y: f64) {
        let px = x * PT_PER_MM;
        let py = (self.height_mm - y) * PT_PER_MM;
        let c = self.text_color;
        self.push_op(format!(
            "BT\n/{} {} Tf\n{} {} {} rg\n{} {} Td\n({}) Tj\nET\n",
            self.font.pdf_name(),
            fmt_num(self.font_size),
            fmt_num(c.r),
            fmt_num(c.g),
            fmt_num(c.b),
            fmt_num(px),
            fmt_num(py),
            escape_pdf_string(text),
        ));
    }

    /// Place text horizontally centered on `cx`.
    pub fn text_centered(&mut self, text: &str, cx: f64, y: f64) {
        let w = self.text_width(text);
        self.text(text, cx - w / 2.0, y);
    }

    /// Place a stack of lines starting at (x, y), advancing `line_height`
    /// mm per line.
    pub fn text_lines(&mut self, lines: &[String], x: f64, y: f64, line_height: f64) {
        for (i, line) in lines.iter().enumerate() {
            self.text(line, x, y + i as f64 * line_height);
        }
    }

    // ---- serialization ----

    /// Serialize the accumulated page into a complete PDF document,
    /// consuming the surface.
    pub fn finish(self) -> io::Result<Vec<u8>> {
        serialize_page(
            self.width_mm * PT_PER_MM,
            self.height_mm * PT_PER_MM,
            &self.ops,
            self.compress,
            &self.info,
        )
    }

    fn emit_fill_color(&mut self) {
        let c = self.fill_color;
        self.push_op(format!(
            "{} {} {} rg\n",
            fmt_num(c.r),
            fmt_num(c.g),
            fmt_num(c.b)
        ));
    }

    fn emit_stroke_state(&mut self) {
        let c = self.draw_color;
        self.push_op(format!(
            "{} {} {} RG\n{} w\n",
            fmt_num(c.r),
            fmt_num(c.g),
            fmt_num(c.b),
            fmt_num(self.line_width_mm * PT_PER_MM),
        ));
    }

    fn push_op(&mut self, op: String) {
        self.ops.extend_from_slice(op.as_bytes());
    }

    #[cfg(test)]
    pub(crate) fn content_ops(&self) -> &[u8] {
        &self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_op_converts_mm_to_pt_and_flips_y() {
        let mut page = Surface::a4();
        page.set_font(Font::Helvetica, 10.0);
        page.text("x", 0.0, 297.0); // bottom-left corner in mm
        let ops = String::from_utf8_lossy(page.content_ops()).to_string();
        // y = 297mm from the top is y = 0pt in PDF space.
        assert!(ops.contains("0 0 Td"), "ops: {}", ops);
        assert!(ops.contains("/F1 10 Tf"));
    }

    #[test]
    fn filled_rect_uses_fill_color() {
        let mut page = Surface::a4();
        page.set_fill_color(Color::rgb8(255, 0, 0));
        page.rect(0.0, 0.0, 210.0, 10.0, Paint::Fill);
        let ops = String::from_utf8_lossy(page.content_ops()).to_string();
        assert!(ops.contains("1 0 0 rg"));
        assert!(ops.contains("re\nf\n"));
    }

    #[test]
    fn stroked_rect_uses_draw_color_and_line_width() {
        let mut page = Surface::a4();
        page.set_draw_color(Color::rgb8(0, 0, 255));
        page.set_line_width(1.0);
        page.rect(10.0, 10.0, 50.0, 20.0, Paint::Stroke);
        let ops = String::from_utf8_lossy(page.content_ops()).to_string();
        assert!(ops.contains("0 0 1 RG"));
        assert!(ops.contains("re\nS\n"));
    }

    #[test]
    fn centered_text_offsets_by_half_width() {
        let mut page = Surface::a4();
        page.set_font(Font::Helvetica, 12.0);
        let w = page.text_width("INVOICE");
        page.text_centered("INVOICE", 105.0, 20.0);

        let mut reference = Surface::a4();
        reference.set_font(Font::Helvetica, 12.0);
        reference.text("INVOICE", 105.0 - w / 2.0, 20.0);

        assert_eq!(page.content_ops(), reference.content_ops());
    }

    #[test]
    fn finish_produces_valid_document() {
        let mut page = Surface::a4();
        page.set_info("Title", "test");
        page.text("hello", 20.0, 20.0);
        let bytes = page.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\n"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(hello) Tj"));
        assert!(text.contains("/Title (test)"));
    }
}
