//! Text wrapping and row-height arithmetic shared by all templates.
//!
//! These are pure functions over font metrics: the same inputs always
//! produce the same lines and heights, which is what makes section offsets
//! reproducible across renders.

use crate::fonts::{measure_mm, Font};

/// Vertical advance per wrapped text line, in mm.
pub const LINE_HEIGHT: f64 = 4.0;

/// Minimum height reserved for one item row, in mm.
pub const MIN_ITEM_HEIGHT: f64 = 8.0;

/// Vertical gap between flowed sections, in mm.
pub const SECTION_SPACING: f64 = 10.0;

/// Word-wrap `text` into lines no wider than `max_width_mm`.
///
/// Breaks on word boundaries only; a single word wider than the limit is
/// placed on its own line rather than split, so a code point is never torn
/// apart. Explicit newlines start a new line. Empty or blank input yields
/// one empty line.
pub fn wrap_text(text: &str, max_width_mm: f64, font: Font, font_size: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for para in text.split('\n') {
        wrap_paragraph(para.trim(), max_width_mm, font, font_size, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(text: &str, max_width_mm: f64, font: Font, font_size: f64, out: &mut Vec<String>) {
    if text.is_empty() {
        out.push(String::new());
        return;
    }
    let space_w = measure_mm(" ", font, font_size);
    let mut current = String::new();
    let mut current_w = 0.0_f64;

    for word in text.split_whitespace() {
        let word_w = measure_mm(word, font, font_size);
        let needed = if current.is_empty() {
            word_w
        } else {
            current_w + space_w + word_w
        };

        if needed > max_width_mm && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = word_w;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_w = needed;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Height in mm reserved for one line-item row: the wrapped description's
/// line count times [`LINE_HEIGHT`], floored at [`MIN_ITEM_HEIGHT`].
pub fn item_height(description: &str, max_width_mm: f64, font: Font, font_size: f64) -> f64 {
    let lines = wrap_text(description, max_width_mm, font, font_size);
    (lines.len() as f64 * LINE_HEIGHT).max(MIN_ITEM_HEIGHT)
}
