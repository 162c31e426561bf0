use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::fonts::Font;

// An invoice is always a single page drawn with two shared fonts, so the
// object layout is fixed: catalog, pages tree, the two fonts, one content
// stream, one page, and the info dictionary.
const CATALOG_OBJ: u32 = 1;
const PAGES_OBJ: u32 = 2;
const FONT_HELV_OBJ: u32 = 3;
const FONT_HELV_BOLD_OBJ: u32 = 4;
const CONTENT_OBJ: u32 = 5;
const PAGE_OBJ: u32 = 6;
const INFO_OBJ: u32 = 7;
const OBJ_COUNT: u32 = 8; // including the free object 0

/// Serialize a finished page into a complete PDF 1.7 document.
///
/// `content_ops` is the raw content stream; when `compress` is set it is
/// FlateDecode-encoded before embedding. `info` entries become the document
/// info dictionary ("Title", "Creator", ...).
pub(crate) fn serialize_page(
    width_pt: f64,
    height_pt: f64,
    content_ops: &[u8],
    compress: bool,
    info: &[(String, String)],
) -> io::Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<(u32, usize)> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.7\n");
    // Binary comment: 4 bytes >= 128 for binary detection.
    buf.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

    write_object(
        &mut buf,
        &mut offsets,
        CATALOG_OBJ,
        format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_OBJ).as_bytes(),
    );
    write_object(
        &mut buf,
        &mut offsets,
        PAGES_OBJ,
        format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", PAGE_OBJ).as_bytes(),
    );
    write_font_object(&mut buf, &mut offsets, FONT_HELV_OBJ, Font::Helvetica);
    write_font_object(&mut buf, &mut offsets, FONT_HELV_BOLD_OBJ, Font::HelveticaBold);

    write_content_object(&mut buf, &mut offsets, content_ops, compress)?;

    write_object(
        &mut buf,
        &mut offsets,
        PAGE_OBJ,
        format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /{} {} 0 R /{} {} 0 R >> >> /Contents {} 0 R >>",
            PAGES_OBJ,
            fmt_num(width_pt),
            fmt_num(height_pt),
            Font::Helvetica.pdf_name(),
            FONT_HELV_OBJ,
            Font::HelveticaBold.pdf_name(),
            FONT_HELV_BOLD_OBJ,
            CONTENT_OBJ,
        )
        .as_bytes(),
    );

    let mut info_body = String::from("<<");
    for (key, value) in info {
        info_body.push_str(&format!(" /{} ({})", key, escape_pdf_string(value)));
    }
    info_body.push_str(" >>");
    write_object(&mut buf, &mut offsets, INFO_OBJ, info_body.as_bytes());

    write_xref_and_trailer(&mut buf, &offsets);
    Ok(buf)
}

fn write_object(buf: &mut Vec<u8>, offsets: &mut Vec<(u32, usize)>, num: u32, body: &[u8]) {
    offsets.push((num, buf.len()));
    buf.extend_from_slice(format!("{} 0 obj\n", num).as_bytes());
    buf.extend_from_slice(body);
    buf.extend_from_slice(b"\nendobj\n");
}

fn write_font_object(buf: &mut Vec<u8>, offsets: &mut Vec<(u32, usize)>, num: u32, font: Font) {
    write_object(
        buf,
        offsets,
        num,
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
            font.pdf_base_name()
        )
        .as_bytes(),
    );
}

fn write_content_object(
    buf: &mut Vec<u8>,
    offsets: &mut Vec<(u32, usize)>,
    ops: &[u8],
    compress: bool,
) -> io::Result<()> {
    offsets.push((CONTENT_OBJ, buf.len()));
    buf.extend_from_slice(format!("{} 0 obj\n", CONTENT_OBJ).as_bytes());

    if compress {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(ops)?;
        let compressed = encoder.finish()?;
        buf.extend_from_slice(
            format!(
                "<< /Filter /FlateDecode /Length {} >>\nstream\n",
                compressed.len()
            )
            .as_bytes(),
        );
        buf.extend_from_slice(&compressed);
    } else {
        buf.extend_from_slice(format!("<< /Length {} >>\nstream\n", ops.len()).as_bytes());
        buf.extend_from_slice(ops);
    }
    buf.extend_from_slice(b"\nendstream\nendobj\n");
    Ok(())
}

/// Write xref table, trailer, startxref, and %%EOF. Object numbers are
/// contiguous, so every entry after the free head is in-use.
fn write_xref_and_trailer(buf: &mut Vec<u8>, offsets: &[(u32, usize)]) {
    let xref_offset = buf.len();

    buf.extend_from_slice(format!("xref\n0 {}\n", OBJ_COUNT).as_bytes());
    // Object 0: free entry head (exactly 20 bytes).
    buf.extend_from_slice(b"0000000000 65535 f\r\n");
    for num in 1..OBJ_COUNT {
        let off = offsets
            .iter()
            .find(|&&(n, _)| n == num)
            .map(|&(_, o)| o)
            .unwrap_or(0);
        buf.extend_from_slice(format!("{:010} 00000 n\r\n", off).as_bytes());
    }

    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\n",
            OBJ_COUNT, CATALOG_OBJ, INFO_OBJ,
        )
        .as_bytes(),
    );
    buf.extend_from_slice(format!("startxref\n{}\n%%EOF\n", xref_offset).as_bytes());
}

/// Escape special characters in a PDF literal string.
pub(crate) fn escape_pdf_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            _ => result.push(c),
        }
    }
    result
}

/// Format a number for PDF content streams and dictionaries: integers
/// without a decimal point, reals trimmed of trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}
