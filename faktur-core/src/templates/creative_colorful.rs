use crate::fonts::Font;
use crate::layout::{LINE_HEIGHT, SECTION_SPACING};
use crate::surface::{Color, Paint};
use crate::template::{RenderContext, Template};

use super::fmt_qty;

/// Multi-band header, rainbow table header, rotating pastel row fills,
/// gold-trimmed pink total box, rainbow footer stripes.
pub struct CreativeColorful;

fn purple() -> Color {
    Color::rgb8(138, 43, 226)
}

fn indigo() -> Color {
    Color::rgb8(75, 0, 130)
}

fn deep_sky_blue() -> Color {
    Color::rgb8(0, 191, 255)
}

fn deep_pink() -> Color {
    Color::rgb8(255, 20, 147)
}

fn gold() -> Color {
    Color::rgb8(255, 215, 0)
}

fn dark_orange() -> Color {
    Color::rgb8(255, 140, 0)
}

fn saddle_brown() -> Color {
    Color::rgb8(139, 69, 19)
}

/// Rotating row fills: lavender blush, alice blue, mint cream, floral
/// white, ghost white.
const ROW_PALETTE: [(u8, u8, u8); 5] = [
    (255, 240, 245),
    (240, 248, 255),
    (245, 255, 250),
    (255, 250, 240),
    (248, 248, 255),
];

/// Footer stripe colors, red through violet.
const RAINBOW: [(u8, u8, u8); 7] = [
    (255, 0, 0),
    (255, 165, 0),
    (255, 255, 0),
    (0, 128, 0),
    (0, 0, 255),
    (75, 0, 130),
    (238, 130, 238),
];

impl Template for CreativeColorful {
    fn render_header(&self, ctx: &mut RenderContext) {
        let name = ctx.data().invoice_name.clone();
        let page = ctx.page();

        page.set_fill_color(purple());
        page.rect(0.0, 0.0, 210.0, 15.0, Paint::Fill);
        page.set_fill_color(indigo());
        page.rect(0.0, 15.0, 210.0, 15.0, Paint::Fill);
        page.set_fill_color(deep_sky_blue());
        page.rect(0.0, 30.0, 210.0, 10.0, Paint::Fill);

        page.set_text_color(Color::WHITE);
        page.set_font(Font::HelveticaBold, 28.0);
        page.text(&name, 20.0, 25.0);

        page.set_fill_color(deep_pink());
        page.rect(140.0, 8.0, 55.0, 15.0, Paint::Fill);
        page.set_font(Font::HelveticaBold, 12.0);
        page.text_centered("INVOICE", 167.0, 17.0);
    }

    fn render_from_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let from_box_y = 55.0;

        ctx.page().set_fill_color(Color::rgb8(255, 182, 193));
        ctx.page().rect(15.0, from_box_y, 85.0, 35.0, Paint::Fill);

        ctx.page().set_draw_color(deep_pink());
        ctx.page().set_line_width(1.0);
        ctx.page().rect(15.0, from_box_y, 85.0, 35.0, Paint::Stroke);

        ctx.page().set_font(Font::HelveticaBold, 12.0);
        ctx.page().set_text_color(purple());
        ctx.page().text("FROM", 20.0, from_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        ctx.page().set_text_color(indigo());

        let mut lines = vec![data.from_name.clone(), data.from_email.clone()];
        lines.extend(ctx.wrap_text(&data.from_address, 75.0));
        ctx.page()
            .text_lines(&lines, 20.0, from_box_y + 13.0, LINE_HEIGHT);
    }

    fn render_client_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let client_box_y = 55.0;

        ctx.page().set_fill_color(Color::rgb8(173, 216, 230));
        ctx.page().rect(110.0, client_box_y, 85.0, 35.0, Paint::Fill);

        ctx.page().set_draw_color(deep_sky_blue());
        ctx.page().set_line_width(1.0);
        ctx.page().rect(110.0, client_box_y, 85.0, 35.0, Paint::Stroke);

        ctx.page().set_font(Font::HelveticaBold, 12.0);
        ctx.page().set_text_color(Color::rgb8(0, 100, 0));
        ctx.page().text("TO", 115.0, client_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        ctx.page().set_text_color(Color::rgb8(25, 25, 112));

        let mut lines = vec![data.client_name.clone(), data.client_email.clone()];
        lines.extend(ctx.wrap_text(&data.client_address, 75.0));
        ctx.page()
            .text_lines(&lines, 115.0, client_box_y + 13.0, LINE_HEIGHT);
    }

    fn render_invoice_details(&self, ctx: &mut RenderContext) {
        let number = ctx.data().invoice_number;
        let due = ctx.data().due_date;
        let currency = ctx.data().currency.as_str();
        let date = ctx.fmt_date();
        let details_y = 100.0;
        let page = ctx.page();

        page.set_font(Font::HelveticaBold, 8.0);

        page.set_fill_color(gold());
        page.rect(15.0, details_y, 40.0, 15.0, Paint::Fill);
        page.set_text_color(saddle_brown());
        page.text("INVOICE #", 17.0, details_y + 5.0);
        page.text(&format!("{}", number), 17.0, details_y + 10.0);

        page.set_fill_color(Color::rgb8(144, 238, 144));
        page.rect(60.0, details_y, 45.0, 15.0, Paint::Fill);
        page.set_text_color(Color::rgb8(0, 100, 0));
        page.text("DATE", 62.0, details_y + 5.0);
        page.text(&date, 62.0, details_y + 10.0);

        page.set_fill_color(Color::rgb8(255, 160, 122));
        page.rect(110.0, details_y, 40.0, 15.0, Paint::Fill);
        page.set_text_color(Color::rgb8(220, 20, 60));
        page.text("DUE", 112.0, details_y + 5.0);
        page.text(&format!("{} days", due), 112.0, details_y + 10.0);

        page.set_fill_color(Color::rgb8(221, 160, 221));
        page.rect(155.0, details_y, 40.0, 15.0, Paint::Fill);
        page.set_text_color(Color::rgb8(128, 0, 128));
        page.text("CURRENCY", 157.0, details_y + 5.0);
        page.text(currency, 157.0, details_y + 10.0);
    }

    fn render_table(&self, ctx: &mut RenderContext) {
        let table_start_y = 130.0;

        // One colored band per header column
        ctx.page().set_fill_color(Color::rgb8(255, 99, 71));
        ctx.page()
            .rect(15.0, table_start_y - 5.0, 85.0, 12.0, Paint::Fill);
        ctx.page().set_fill_color(gold());
        ctx.page()
            .rect(100.0, table_start_y - 5.0, 25.0, 12.0, Paint::Fill);
        ctx.page().set_fill_color(Color::rgb8(50, 205, 50));
        ctx.page()
            .rect(125.0, table_start_y - 5.0, 35.0, 12.0, Paint::Fill);
        ctx.page().set_fill_color(Color::rgb8(30, 144, 255));
        ctx.page()
            .rect(160.0, table_start_y - 5.0, 35.0, 12.0, Paint::Fill);

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::WHITE);
        ctx.page().text("DESCRIPTION", 20.0, table_start_y);
        ctx.page().text("QTY", 105.0, table_start_y);
        ctx.page().text("RATE", 130.0, table_start_y);
        ctx.page().text("TOTAL", 165.0, table_start_y);

        ctx.page().set_text_color(Color::BLACK);
        ctx.page().set_font(Font::Helvetica, 9.0);
        let mut current_y = table_start_y + 10.0;

        for (index, item) in ctx.data().items.iter().enumerate() {
            // Narrower wrap width than the other themes keeps the pastel
            // fills clear of the QTY column.
            let description_lines = ctx.wrap_text(&item.description, 70.0);
            let item_h = ctx.item_height(&item.description, 70.0);
            let rate = ctx.fmt_currency(item.rate);
            let amount = ctx.fmt_currency(item.amount());

            let (r, g, b) = ROW_PALETTE[index % ROW_PALETTE.len()];
            ctx.page().set_fill_color(Color::rgb8(r, g, b));
            ctx.page()
                .rect(15.0, current_y - 3.0, 180.0, item_h + 6.0, Paint::Fill);

            ctx.page().set_draw_color(deep_pink());
            ctx.page().set_line_width(0.3);
            ctx.page()
                .rect(15.0, current_y - 3.0, 180.0, item_h + 6.0, Paint::Stroke);

            ctx.page()
                .text_lines(&description_lines, 20.0, current_y + 2.0, LINE_HEIGHT);
            ctx.page()
                .text(&fmt_qty(item.quantity), 105.0, current_y + 2.0);
            ctx.page().text(&rate, 130.0, current_y + 2.0);

            ctx.page().set_font(Font::HelveticaBold, 9.0);
            ctx.page().set_text_color(deep_pink());
            ctx.page().text(&amount, 165.0, current_y + 2.0);
            ctx.page().set_font(Font::Helvetica, 9.0);
            ctx.page().set_text_color(Color::BLACK);

            current_y += item_h + 4.0;
        }
        ctx.set_cursor(current_y);
    }

    fn render_total(&self, ctx: &mut RenderContext) {
        let total_y = ctx.cursor() + SECTION_SPACING;
        let total_text = format!("GRAND TOTAL: {}", ctx.fmt_currency(ctx.data().total));
        let page = ctx.page();

        page.set_fill_color(deep_pink());
        page.rect(100.0, total_y, 95.0, 15.0, Paint::Fill);

        // Gold trim above and below
        page.set_fill_color(gold());
        page.rect(100.0, total_y, 95.0, 2.0, Paint::Fill);
        page.rect(100.0, total_y + 13.0, 95.0, 2.0, Paint::Fill);

        page.set_font(Font::HelveticaBold, 12.0);
        page.set_text_color(Color::WHITE);
        page.text(&total_text, 105.0, total_y + 9.0);
        ctx.set_cursor(total_y + 15.0);
    }

    fn render_note(&self, ctx: &mut RenderContext) {
        let Some(note) = ctx.data().note.clone() else {
            return;
        };
        let note_y = ctx.cursor() + SECTION_SPACING;

        ctx.page().set_fill_color(Color::rgb8(255, 248, 220));
        ctx.page().rect(15.0, note_y, 180.0, 25.0, Paint::Fill);

        ctx.page().set_draw_color(dark_orange());
        ctx.page().set_line_width(1.0);
        ctx.page().rect(15.0, note_y, 180.0, 25.0, Paint::Stroke);

        ctx.page().set_font(Font::HelveticaBold, 11.0);
        ctx.page().set_text_color(dark_orange());
        ctx.page().text("SPECIAL NOTES", 20.0, note_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        let note_lines = ctx.wrap_text(&note, 165.0);
        ctx.page().set_text_color(saddle_brown());
        ctx.page()
            .text_lines(&note_lines, 20.0, note_y + 13.0, LINE_HEIGHT);
        ctx.set_cursor(note_y + 25.0);
    }

    fn render_footer(&self, ctx: &mut RenderContext) {
        let footer_y = 270.0;
        let email = ctx.data().from_email.clone();
        let year = ctx.footer_year();
        let page = ctx.page();

        for (index, &(r, g, b)) in RAINBOW.iter().enumerate() {
            page.set_fill_color(Color::rgb8(r, g, b));
            page.rect(15.0 + index as f64 * 25.0, footer_y, 25.0, 3.0, Paint::Fill);
        }

        page.set_font(Font::Helvetica, 8.0);
        page.set_text_color(purple());
        page.text("Thank you for your amazing business!", 20.0, footer_y + 10.0);
        page.text(
            &format!("Created with love by Faktur - {}", year),
            20.0,
            footer_y + 15.0,
        );

        page.set_text_color(deep_pink());
        page.text(&format!("Email: {}", email), 120.0, footer_y + 10.0);
        page.text("Auto-generated with creative flair!", 120.0, footer_y + 15.0);
    }
}
