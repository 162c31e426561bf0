use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice currency. Closed set: the formatter and locale rules are keyed
/// by this enum, so adding a currency is an additive change here and in
/// `format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Idr,
}

impl Currency {
    /// Wire name as stored alongside the invoice record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Idr => "IDR",
        }
    }

    pub(crate) fn thousands_separator(&self) -> char {
        match self {
            Currency::Usd => ',',
            Currency::Idr => '.',
        }
    }
}

/// One row of the invoice table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

impl LineItem {
    /// Row amount: `quantity * rate`.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Everything a template needs to render one invoice.
///
/// Constructed once per render from the persistence layer and treated as
/// read-only for the duration of the render. Validation is the caller's
/// responsibility: `items` is assumed non-empty, `invoice_number >= 1`, and
/// `total` is assumed to equal the sum of the item amounts. The renderer
/// does not re-check these preconditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    /// Document title, drawn as the header headline.
    pub invoice_name: String,
    pub invoice_number: u32,
    pub currency: Currency,
    pub from_name: String,
    pub from_email: String,
    pub from_address: String,
    pub client_name: String,
    pub client_email: String,
    pub client_address: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Days after `date` that payment is due; 0 means due on receipt.
    pub due_date: u32,
    pub total: f64,
    /// Optional note; when `None` the note section is omitted entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Ordered line items; rendered top to bottom in this order.
    pub items: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_wire_names() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"IDR\"").unwrap(),
            Currency::Idr
        );
    }

    #[test]
    fn line_item_amount() {
        let item = LineItem {
            description: "Consulting".to_string(),
            quantity: 10.0,
            rate: 50.0,
        };
        assert_eq!(item.amount(), 500.0);
    }

    #[test]
    fn invoice_roundtrips_through_json() {
        let data = InvoiceData {
            invoice_name: "Faktur Agustus".to_string(),
            invoice_number: 42,
            currency: Currency::Idr,
            from_name: "PT Maju".to_string(),
            from_email: "billing@maju.co.id".to_string(),
            from_address: "Jl. Sudirman No. 1, Jakarta".to_string(),
            client_name: "CV Klien".to_string(),
            client_email: "ap@klien.co.id".to_string(),
            client_address: "Jl. Thamrin No. 9, Jakarta".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            due_date: 14,
            total: 750000.0,
            note: None,
            items: vec![LineItem {
                description: "Jasa konsultasi".to_string(),
                quantity: 3.0,
                rate: 250000.0,
            }],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"invoiceNumber\":42"));
        assert!(json.contains("\"date\":\"2026-08-01\""));
        assert!(!json.contains("note"));
        let back: InvoiceData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.invoice_number, data.invoice_number);
        assert_eq!(back.items.len(), 1);
        assert_eq!(back.note, None);
    }
}
