use chrono::NaiveDate;
use faktur_core::{
    available_templates, generate_invoice_with, Currency, InvoiceData, LineItem, RenderOptions,
    TemplateId,
};

/// Helper: invoice with a single $500 line item and no note.
fn simple_invoice() -> InvoiceData {
    InvoiceData {
        invoice_name: "Faktur Studio".to_string(),
        invoice_number: 7,
        currency: Currency::Usd,
        from_name: "Faktur Studio LLC".to_string(),
        from_email: "billing@faktur.example".to_string(),
        from_address: "Jl. Sudirman No. 1, Jakarta".to_string(),
        client_name: "Acme Corporation".to_string(),
        client_email: "accounts@acme.example".to_string(),
        client_address: "123 Market Street, San Francisco".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
        due_date: 14,
        total: 500.0,
        note: None,
        items: vec![LineItem {
            description: "Consulting".to_string(),
            quantity: 1.0,
            rate: 500.0,
        }],
    }
}

/// Helper: uncompressed output with a pinned footer year, so the content
/// stream is readable text and renders are reproducible.
fn plain_opts() -> RenderOptions {
    RenderOptions {
        compress: false,
        footer_year: Some(2026),
    }
}

/// Helper: the baseline y (in PDF points) of the text op drawing `needle`.
/// Larger means higher on the page. `needle` must be given as it appears
/// in the stream, with parentheses backslash-escaped.
fn baseline_y(pdf_text: &str, needle: &str) -> f64 {
    let tj = format!("({}) Tj", needle);
    let at = pdf_text
        .find(&tj)
        .unwrap_or_else(|| panic!("text op for {:?} not found", needle));
    let td_line = pdf_text[..at]
        .trim_end()
        .rsplit('\n')
        .next()
        .expect("op before Tj");
    let mut parts = td_line.split_whitespace();
    let _x = parts.next().expect("x coord");
    parts
        .next()
        .expect("y coord")
        .parse::<f64>()
        .expect("numeric y coord")
}

#[test]
fn every_theme_produces_a_single_page_pdf() {
    let data = simple_invoice();
    for info in available_templates() {
        let bytes = generate_invoice_with(&data, info.id, &plain_opts()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\n"), "{}", info.name);
        assert!(bytes.ends_with(b"%%EOF\n"), "{}", info.name);

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"), "{}", info.name);
        assert!(text.contains("/BaseFont /Helvetica"), "{}", info.name);
        // The single item's amount and the grand total.
        assert!(text.contains("($500) Tj"), "{}", info.name);
        assert!(text.contains("/Title (Invoice #7)"), "{}", info.name);
    }
}

#[test]
fn note_section_is_omitted_when_note_is_none() {
    let data = simple_invoice();
    for info in available_templates() {
        let bytes = generate_invoice_with(&data, info.id, &plain_opts()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        for heading in ["CATATAN", "Notes:", "NOTES", "SPECIAL NOTES"] {
            assert!(
                !text.contains(heading),
                "{} drew a note heading for a note-less invoice",
                info.name
            );
        }
    }
}

#[test]
fn note_section_is_drawn_when_present() {
    let mut data = simple_invoice();
    data.note = Some("Payment due within 14 days.".to_string());

    let headings = [
        (TemplateId::ModernBlue, "CATATAN"),
        (TemplateId::ClassicMinimal, "Notes:"),
        (TemplateId::ProfessionalDark, "NOTES"),
        (TemplateId::CreativeColorful, "SPECIAL NOTES"),
    ];
    for (id, heading) in headings {
        let bytes = generate_invoice_with(&data, id, &plain_opts()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains(heading), "missing {:?} heading", id);
        assert!(text.contains("(Payment due within 14 days.) Tj"));
    }
}

#[test]
fn output_is_deterministic_with_pinned_year() {
    let data = simple_invoice();
    for compress in [false, true] {
        let opts = RenderOptions {
            compress,
            footer_year: Some(2026),
        };
        for info in available_templates() {
            let a = generate_invoice_with(&data, info.id, &opts).unwrap();
            let b = generate_invoice_with(&data, info.id, &opts).unwrap();
            assert_eq!(a, b, "{} compress={}", info.name, compress);
        }
    }
}

#[test]
fn compressed_output_is_smaller_and_not_plaintext() {
    let data = simple_invoice();
    let plain = generate_invoice_with(&data, TemplateId::ModernBlue, &plain_opts()).unwrap();
    let packed = generate_invoice_with(
        &data,
        TemplateId::ModernBlue,
        &RenderOptions {
            compress: true,
            footer_year: Some(2026),
        },
    )
    .unwrap();

    assert!(packed.len() < plain.len());
    let text = String::from_utf8_lossy(&packed);
    assert!(text.contains("/Filter /FlateDecode"));
    assert!(!text.contains("($500) Tj"));
}

#[test]
fn wrapped_description_pushes_later_rows_down() {
    let mut short = simple_invoice();
    short.items = vec![
        LineItem {
            description: "Design".to_string(),
            quantity: 1.0,
            rate: 100.0,
        },
        LineItem {
            description: "Second item".to_string(),
            quantity: 1.0,
            rate: 400.0,
        },
    ];
    let mut long = short.clone();
    long.items[0].description = "Full brand identity design including logo exploration, \
         typography system, color palette documentation, and stationery \
         templates for print and digital use"
        .to_string();

    let opts = plain_opts();
    let short_pdf = generate_invoice_with(&short, TemplateId::ModernBlue, &opts).unwrap();
    let long_pdf = generate_invoice_with(&long, TemplateId::ModernBlue, &opts).unwrap();
    let short_text = String::from_utf8_lossy(&short_pdf);
    let long_text = String::from_utf8_lossy(&long_pdf);

    let short_row2 = baseline_y(&short_text, "Second item");
    let long_row2 = baseline_y(&long_text, "Second item");
    assert!(
        long_row2 < short_row2,
        "wrapped first row should lower the second row ({} vs {})",
        long_row2,
        short_row2
    );

    // The total follows the table end in both cases.
    let total_short = baseline_y(&short_text, "TOTAL \\(USD\\): $500");
    let total_long = baseline_y(&long_text, "TOTAL \\(USD\\): $500");
    assert!(total_short > total_long);
    assert!(total_short < short_row2);
    assert!(total_long < long_row2);
}

#[test]
fn idr_invoice_uses_indonesian_formatting() {
    let mut data = simple_invoice();
    data.currency = Currency::Idr;
    data.total = 1_500_000.0;
    data.items = vec![LineItem {
        description: "Jasa konsultasi".to_string(),
        quantity: 1.0,
        rate: 1_500_000.0,
    }];

    let bytes = generate_invoice_with(&data, TemplateId::ModernBlue, &plain_opts()).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("(Rp 1.500.000) Tj"));
    assert!(text.contains("(Tanggal: 29 Agustus 2026) Tj"));
    assert!(text.contains("(Jatuh Tempo: 14 hari) Tj"));
}

#[test]
fn content_streams_are_ascii_only() {
    // The builtin fonts use Standard encoding, so every drawn string must
    // stay in the ASCII range; a multibyte glyph would render mojibake.
    let data = simple_invoice();
    for info in available_templates() {
        let bytes = generate_invoice_with(&data, info.id, &plain_opts()).unwrap();
        // Skip the header's binary comment line.
        let body = &bytes[b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".len()..];
        assert!(
            body.iter().all(|&b| b < 128),
            "{} emitted a non-ASCII byte",
            info.name
        );
    }
}

#[test]
fn footer_carries_the_pinned_year() {
    let data = simple_invoice();
    let markers = [
        (TemplateId::ModernBlue, "Dibuat dengan Faktur - 2026"),
        (TemplateId::ClassicMinimal, "Generated by Faktur - 2026"),
        (TemplateId::ProfessionalDark, "\\(c\\) 2026 Faktur"),
        (TemplateId::CreativeColorful, "Created with love by Faktur - 2026"),
    ];
    for (id, marker) in markers {
        let bytes = generate_invoice_with(&data, id, &plain_opts()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains(marker), "missing footer marker for {:?}", id);
    }
}
