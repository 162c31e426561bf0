//! Display formatting for amounts and dates.
//!
//! Matches the id-ID / en-US conventions invoices are issued in: whole-unit
//! currency with locale-specific grouping, and Indonesian long-form dates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

use crate::data::Currency;

/// Jakarta is UTC+7 (WIB), with no daylight saving.
const JAKARTA_OFFSET_SECS: i32 = 7 * 3600;

const MONTH_NAMES_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format an amount in the invoice currency with zero fraction digits.
///
/// USD renders en-US style ("$1,500"); IDR renders id-ID style
/// ("Rp 1.500"). Fractions round half away from zero.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);
    let grouped = group_digits(&digits, currency.thousands_separator());
    let sign = if negative { "-" } else { "" };
    match currency {
        Currency::Usd => format!("{}${}", sign, grouped),
        Currency::Idr => format!("{}Rp {}", sign, grouped),
    }
}

/// Insert a thousands separator every three digits from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*b as char);
    }
    out
}

/// Format an invoice date in Indonesian long form, e.g. "29 Agustus 2026".
pub fn format_invoice_date(date: NaiveDate) -> String {
    let month = MONTH_NAMES_ID[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// The calendar year in Jakarta (UTC+7) for the given instant. Drives the
/// footer "generated" line; injectable so renders can be deterministic.
pub fn jakarta_year(now: DateTime<Utc>) -> i32 {
    let offset = FixedOffset::east_opt(JAKARTA_OFFSET_SECS).expect("valid fixed offset");
    now.with_timezone(&offset).year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn usd_grouping() {
        assert_eq!(format_currency(500.0, Currency::Usd), "$500");
        assert_eq!(format_currency(1500.0, Currency::Usd), "$1,500");
        assert_eq!(format_currency(1234567.0, Currency::Usd), "$1,234,567");
    }

    #[test]
    fn idr_grouping() {
        assert_eq!(format_currency(500.0, Currency::Idr), "Rp 500");
        assert_eq!(format_currency(1500000.0, Currency::Idr), "Rp 1.500.000");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(format_currency(499.5, Currency::Usd), "$500");
        assert_eq!(format_currency(499.4, Currency::Usd), "$499");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_currency(-1250.0, Currency::Usd), "-$1,250");
    }

    #[test]
    fn indonesian_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(format_invoice_date(date), "29 Agustus 2026");
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_invoice_date(new_year), "1 Januari 2025");
    }

    #[test]
    fn jakarta_year_rolls_over_before_utc() {
        // 2025-12-31 18:00 UTC is already 2026-01-01 01:00 in Jakarta.
        let instant = Utc.with_ymd_and_hms(2025, 12, 31, 18, 0, 0).unwrap();
        assert_eq!(jakarta_year(instant), 2026);
        let earlier = Utc.with_ymd_and_hms(2025, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(jakarta_year(earlier), 2025);
    }
}
