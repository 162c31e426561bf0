/// Renders the same invoice with every built-in theme.
///
/// Run with:
///   cargo run --example generate_themes -p faktur-demos
///
/// Writes output to: demos/output/<theme>.pdf
use chrono::NaiveDate;
use faktur_core::{
    available_templates, generate_invoice_with, Currency, InvoiceData, LineItem, RenderOptions,
};

fn sample_invoice() -> InvoiceData {
    InvoiceData {
        invoice_name: "Faktur Studio".to_string(),
        invoice_number: 1024,
        currency: Currency::Usd,
        from_name: "Faktur Studio LLC".to_string(),
        from_email: "billing@faktur.example".to_string(),
        from_address: "Jl. Jend. Sudirman Kav. 52-53, SCBD, Jakarta Selatan 12190".to_string(),
        client_name: "Acme Corporation".to_string(),
        client_email: "accounts@acme.example".to_string(),
        client_address: "123 Market Street, Suite 400, San Francisco, CA 94105".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date"),
        due_date: 14,
        total: 5250.0,
        note: Some(
            "Payment via wire transfer to the account on file. \
             A 2% late fee applies after the due date."
                .to_string(),
        ),
        items: vec![
            LineItem {
                description: "Brand identity design".to_string(),
                quantity: 1.0,
                rate: 2500.0,
            },
            LineItem {
                description: "Landing page implementation, responsive layout with \
                              dark mode support and accessibility audit"
                    .to_string(),
                quantity: 1.0,
                rate: 2000.0,
            },
            LineItem {
                description: "Hosting setup".to_string(),
                quantity: 3.0,
                rate: 250.0,
            },
        ],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = sample_invoice();
    let options = RenderOptions::default();

    std::fs::create_dir_all("demos/output")?;
    for info in available_templates() {
        let bytes = generate_invoice_with(&data, info.id, &options)?;
        let path = format!("demos/output/{}.pdf", info.id.as_str().to_lowercase());
        std::fs::write(&path, &bytes)?;
        println!("{:<18} {:>7} bytes  {}", info.name, bytes.len(), path);
    }
    Ok(())
}
