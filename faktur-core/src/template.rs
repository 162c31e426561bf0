//! The rendering contract every theme implements.
//!
//! A render is eight steps in fixed order (header, from-section,
//! client-section, invoice-details, table, total, note, footer) against one
//! shared [`RenderContext`]. Steps before the table draw at fixed positions;
//! the table records where it ended, and the total and note sections place
//! themselves relative to that running offset, so row counts and wrapped
//! descriptions push everything below them down without any per-theme
//! bookkeeping.

use crate::data::InvoiceData;
use crate::format;
use crate::layout;
use crate::surface::Surface;

/// A complete visual theme. Implementations hold no state of their own;
/// everything flows through the context they are handed.
pub trait Template {
    fn render_header(&self, ctx: &mut RenderContext);
    fn render_from_section(&self, ctx: &mut RenderContext);
    fn render_client_section(&self, ctx: &mut RenderContext);
    fn render_invoice_details(&self, ctx: &mut RenderContext);
    fn render_table(&self, ctx: &mut RenderContext);
    fn render_total(&self, ctx: &mut RenderContext);
    /// May return without drawing; no space is reserved in that case.
    fn render_note(&self, ctx: &mut RenderContext);
    fn render_footer(&self, ctx: &mut RenderContext);
}

/// Shared state for one render: the drawing surface, the read-only invoice
/// data, the running vertical cursor, and the injected footer year.
pub struct RenderContext<'a> {
    page: Surface,
    data: &'a InvoiceData,
    cursor_y: f64,
    footer_year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(page: Surface, data: &'a InvoiceData, footer_year: i32) -> Self {
        RenderContext {
            page,
            data,
            cursor_y: 0.0,
            footer_year,
        }
    }

    pub fn page(&mut self) -> &mut Surface {
        &mut self.page
    }

    /// The invoice being rendered. Tied to the render's lifetime, not to
    /// this borrow, so it can be held across mutating calls.
    pub fn data(&self) -> &'a InvoiceData {
        self.data
    }

    /// Bottom edge (mm) of the last flowed section.
    pub fn cursor(&self) -> f64 {
        self.cursor_y
    }

    /// Record the bottom edge of the section just drawn.
    pub fn set_cursor(&mut self, y: f64) {
        self.cursor_y = y;
    }

    /// Year shown in footer "generated" lines.
    pub fn footer_year(&self) -> i32 {
        self.footer_year
    }

    /// Format an amount in the invoice's currency.
    pub fn fmt_currency(&self, amount: f64) -> String {
        format::format_currency(amount, self.data.currency)
    }

    /// The issue date in Indonesian long form.
    pub fn fmt_date(&self) -> String {
        format::format_invoice_date(self.data.date)
    }

    /// Wrap text at `max_width_mm` using the surface's current font state,
    /// the same metrics the text will be drawn with.
    pub fn wrap_text(&self, text: &str, max_width_mm: f64) -> Vec<String> {
        layout::wrap_text(text, max_width_mm, self.page.font(), self.page.font_size())
    }

    /// Row height for an item description at the current font state.
    pub fn item_height(&self, description: &str, max_width_mm: f64) -> f64 {
        layout::item_height(
            description,
            max_width_mm,
            self.page.font(),
            self.page.font_size(),
        )
    }

    pub fn into_surface(self) -> Surface {
        self.page
    }
}
