pub mod data;
pub mod error;
pub mod fonts;
pub mod format;
pub mod layout;
pub mod registry;
pub mod render;
pub mod surface;
pub mod template;
pub mod templates;

mod writer;

pub use data::{Currency, InvoiceData, LineItem};
pub use error::RenderError;
pub use registry::{available_templates, create_template, TemplateId, TemplateInfo};
pub use render::{generate_invoice, generate_invoice_with, RenderOptions};
pub use template::{RenderContext, Template};
