//! The four concrete themes. Identical data bindings and height
//! accumulation; only the cosmetics differ.

mod classic_minimal;
mod creative_colorful;
mod modern_blue;
mod professional_dark;

pub use classic_minimal::ClassicMinimal;
pub use creative_colorful::CreativeColorful;
pub use modern_blue::ModernBlue;
pub use professional_dark::ProfessionalDark;

/// Quantities print without a decimal point when whole ("10", not "10.0").
pub(crate) fn fmt_qty(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}
