//! PDF generation entry point.

use chrono::Utc;
use tracing::debug;

use crate::data::InvoiceData;
use crate::error::RenderError;
use crate::format::jakarta_year;
use crate::registry::{create_template, TemplateId};
use crate::surface::Surface;
use crate::template::RenderContext;

/// Knobs for one render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Deflate the content stream. Off gives a plain-text stream, useful
    /// for golden-file comparisons.
    pub compress: bool,
    /// Year printed in footer "generated" lines. Defaults to the current
    /// year in Jakarta time; pin it for reproducible output.
    pub footer_year: Option<i32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            compress: true,
            footer_year: None,
        }
    }
}

/// Renders `data` with the given theme into a complete single-page PDF.
pub fn generate_invoice(data: &InvoiceData, template: TemplateId) -> Result<Vec<u8>, RenderError> {
    generate_invoice_with(data, template, &RenderOptions::default())
}

/// [`generate_invoice`] with explicit options.
pub fn generate_invoice_with(
    data: &InvoiceData,
    template: TemplateId,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    debug!(
        template = template.as_str(),
        invoice_number = data.invoice_number,
        items = data.items.len(),
        "rendering invoice"
    );

    let mut page = Surface::a4();
    page.set_compression(options.compress);
    page.set_info("Title", &format!("Invoice #{}", data.invoice_number));
    page.set_info("Producer", "Faktur");

    let footer_year = options
        .footer_year
        .unwrap_or_else(|| jakarta_year(Utc::now()));

    let theme = create_template(template);
    let mut ctx = RenderContext::new(page, data, footer_year);

    theme.render_header(&mut ctx);
    theme.render_from_section(&mut ctx);
    theme.render_client_section(&mut ctx);
    theme.render_invoice_details(&mut ctx);
    theme.render_table(&mut ctx);
    theme.render_total(&mut ctx);
    theme.render_note(&mut ctx);
    theme.render_footer(&mut ctx);

    let bytes = ctx.into_surface().finish()?;
    debug!(bytes = bytes.len(), "invoice rendered");
    Ok(bytes)
}
