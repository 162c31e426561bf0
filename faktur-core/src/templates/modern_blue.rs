use crate::fonts::Font;
use crate::layout::{LINE_HEIGHT, SECTION_SPACING};
use crate::surface::{Color, Paint};
use crate::template::{RenderContext, Template};

use super::fmt_qty;

/// Blue header band, green accent boxes, light gray party panels,
/// alternating row fills. The default theme.
pub struct ModernBlue;

fn blue() -> Color {
    Color::rgb8(41, 128, 185)
}

fn green() -> Color {
    Color::rgb8(46, 204, 113)
}

fn dark_gray() -> Color {
    Color::rgb8(52, 73, 94)
}

fn panel_gray() -> Color {
    Color::rgb8(236, 240, 241)
}

impl Template for ModernBlue {
    fn render_header(&self, ctx: &mut RenderContext) {
        let name = ctx.data().invoice_name.clone();
        let page = ctx.page();

        page.set_fill_color(blue());
        page.rect(0.0, 0.0, 210.0, 35.0, Paint::Fill);

        page.set_text_color(Color::WHITE);
        page.set_font(Font::HelveticaBold, 28.0);
        page.text(&name, 20.0, 22.0);

        // Status badge
        page.set_fill_color(green());
        page.rect(150.0, 8.0, 40.0, 8.0, Paint::Fill);
        page.set_font(Font::HelveticaBold, 10.0);
        page.text_centered("INVOICE", 170.0, 13.0);

        page.set_text_color(dark_gray());
    }

    fn render_from_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let from_box_y = 45.0;

        ctx.page().set_fill_color(panel_gray());
        ctx.page().rect(15.0, from_box_y, 85.0, 35.0, Paint::Fill);

        ctx.page().set_font(Font::HelveticaBold, 12.0);
        ctx.page().set_text_color(blue());
        ctx.page().text("DARI", 20.0, from_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 10.0);
        ctx.page().set_text_color(dark_gray());

        let mut lines = vec![data.from_name.clone(), data.from_email.clone()];
        lines.extend(ctx.wrap_text(&data.from_address, 75.0));
        ctx.page()
            .text_lines(&lines, 20.0, from_box_y + 13.0, LINE_HEIGHT);
    }

    fn render_client_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let client_box_y = 45.0;

        ctx.page().set_fill_color(panel_gray());
        ctx.page().rect(110.0, client_box_y, 85.0, 35.0, Paint::Fill);

        ctx.page().set_font(Font::HelveticaBold, 12.0);
        ctx.page().set_text_color(blue());
        ctx.page().text("KEPADA", 115.0, client_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 10.0);
        ctx.page().set_text_color(dark_gray());

        let mut lines = vec![data.client_name.clone(), data.client_email.clone()];
        lines.extend(ctx.wrap_text(&data.client_address, 75.0));
        ctx.page()
            .text_lines(&lines, 115.0, client_box_y + 13.0, LINE_HEIGHT);
    }

    fn render_invoice_details(&self, ctx: &mut RenderContext) {
        let number = ctx.data().invoice_number;
        let due = ctx.data().due_date;
        let date = ctx.fmt_date();
        let page = ctx.page();

        page.set_fill_color(Color::WHITE);
        page.set_draw_color(blue());
        page.rect(110.0, 20.0, 85.0, 20.0, Paint::FillStroke);

        page.set_font(Font::Helvetica, 9.0);
        page.set_text_color(dark_gray());
        page.text(&format!("No. Faktur: #{}", number), 115.0, 26.0);
        page.text(&format!("Tanggal: {}", date), 115.0, 30.0);
        page.text(&format!("Jatuh Tempo: {} hari", due), 115.0, 34.0);
    }

    fn render_table(&self, ctx: &mut RenderContext) {
        let table_start_y = 95.0;

        ctx.page().set_fill_color(blue());
        ctx.page()
            .rect(15.0, table_start_y - 5.0, 180.0, 12.0, Paint::Fill);

        ctx.page().set_font(Font::HelveticaBold, 11.0);
        ctx.page().set_text_color(Color::WHITE);
        ctx.page().text("DESKRIPSI", 20.0, table_start_y);
        ctx.page().text("QTY", 105.0, table_start_y);
        ctx.page().text("BIAYA/HARGA", 130.0, table_start_y);
        ctx.page().text("TOTAL", 165.0, table_start_y);

        ctx.page().set_text_color(dark_gray());
        ctx.page().set_font(Font::Helvetica, 10.0);
        let mut current_y = table_start_y + 10.0;

        for (index, item) in ctx.data().items.iter().enumerate() {
            let description_lines = ctx.wrap_text(&item.description, 75.0);
            let item_h = ctx.item_height(&item.description, 75.0);
            let rate = ctx.fmt_currency(item.rate);
            let amount = ctx.fmt_currency(item.amount());

            let row_fill = if index % 2 == 0 {
                Color::rgb8(248, 249, 250)
            } else {
                Color::rgb8(255, 249, 250)
            };
            ctx.page().set_fill_color(row_fill);
            ctx.page()
                .rect(15.0, current_y - 3.0, 180.0, item_h + 6.0, Paint::Fill);

            ctx.page()
                .text_lines(&description_lines, 20.0, current_y + 2.0, LINE_HEIGHT);
            ctx.page()
                .text(&fmt_qty(item.quantity), 105.0, current_y + 2.0);
            ctx.page().text(&rate, 130.0, current_y + 2.0);

            ctx.page().set_font(Font::HelveticaBold, 10.0);
            ctx.page().text(&amount, 165.0, current_y + 2.0);
            ctx.page().set_font(Font::Helvetica, 10.0);

            current_y += item_h + 4.0;
        }
        ctx.set_cursor(current_y);
    }

    fn render_total(&self, ctx: &mut RenderContext) {
        let total_y = ctx.cursor() + SECTION_SPACING;
        let total_text = format!(
            "TOTAL ({}): {}",
            ctx.data().currency.as_str(),
            ctx.fmt_currency(ctx.data().total)
        );
        let page = ctx.page();

        page.set_fill_color(green());
        page.rect(120.0, total_y, 75.0, 15.0, Paint::Fill);

        page.set_font(Font::HelveticaBold, 12.0);
        page.set_text_color(Color::WHITE);
        page.text(&total_text, 125.0, total_y + 9.0);

        page.set_text_color(dark_gray());
        ctx.set_cursor(total_y + 15.0);
    }

    fn render_note(&self, ctx: &mut RenderContext) {
        let Some(note) = ctx.data().note.clone() else {
            return;
        };
        let note_y = ctx.cursor() + SECTION_SPACING;

        ctx.page().set_draw_color(blue());
        ctx.page().set_fill_color(Color::rgb8(248, 249, 250));
        ctx.page().rect(15.0, note_y, 180.0, 25.0, Paint::FillStroke);

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(blue());
        ctx.page().text("CATATAN", 20.0, note_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 10.0);
        let note_lines = ctx.wrap_text(&note, 165.0);
        ctx.page().set_text_color(dark_gray());
        ctx.page()
            .text_lines(&note_lines, 20.0, note_y + 13.0, LINE_HEIGHT);
        ctx.set_cursor(note_y + 25.0);
    }

    fn render_footer(&self, ctx: &mut RenderContext) {
        let footer_y = 280.0;
        let email = ctx.data().from_email.clone();
        let year = ctx.footer_year();
        let page = ctx.page();

        page.set_draw_color(blue());
        page.line(15.0, footer_y, 195.0, footer_y);

        page.set_font(Font::Helvetica, 8.0);
        page.set_text_color(Color::rgb8(128, 128, 128));
        page.text("Terima kasih atas kepercayaan Anda!", 20.0, footer_y + 8.0);
        page.text(
            &format!("Dibuat dengan Faktur - {}", year),
            20.0,
            footer_y + 12.0,
        );

        page.text(&format!("Email: {}", email), 120.0, footer_y + 8.0);
        page.text("Dokumen ini dibuat secara otomatis", 120.0, footer_y + 12.0);
    }
}
