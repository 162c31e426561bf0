use crate::fonts::Font;
use crate::layout::{LINE_HEIGHT, SECTION_SPACING};
use crate::surface::{Color, Paint};
use crate::template::{RenderContext, Template};

use super::fmt_qty;

/// Black-on-white rules and typography, no boxes, shaded even rows.
pub struct ClassicMinimal;

fn light_gray() -> Color {
    Color::rgb8(250, 250, 250)
}

impl Template for ClassicMinimal {
    fn render_header(&self, ctx: &mut RenderContext) {
        let name = ctx.data().invoice_name.clone();
        let page = ctx.page();

        page.set_draw_color(Color::BLACK);
        page.set_line_width(0.5);
        page.line(15.0, 30.0, 195.0, 30.0);

        page.set_text_color(Color::BLACK);
        page.set_font(Font::HelveticaBold, 24.0);
        page.text(&name, 20.0, 25.0);

        page.set_font(Font::Helvetica, 14.0);
        page.text("INVOICE", 170.0, 25.0);
    }

    fn render_from_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let from_y = 45.0;

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::BLACK);
        ctx.page().text("FROM:", 20.0, from_y);

        ctx.page().set_font(Font::Helvetica, 10.0);
        let mut lines = vec![data.from_name.clone(), data.from_email.clone()];
        lines.extend(ctx.wrap_text(&data.from_address, 80.0));
        ctx.page()
            .text_lines(&lines, 20.0, from_y + 5.0, LINE_HEIGHT);
    }

    fn render_client_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let client_y = 45.0;

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::BLACK);
        ctx.page().text("TO:", 110.0, client_y);

        ctx.page().set_font(Font::Helvetica, 10.0);
        let mut lines = vec![data.client_name.clone(), data.client_email.clone()];
        lines.extend(ctx.wrap_text(&data.client_address, 80.0));
        ctx.page()
            .text_lines(&lines, 110.0, client_y + 5.0, LINE_HEIGHT);
    }

    fn render_invoice_details(&self, ctx: &mut RenderContext) {
        let number = ctx.data().invoice_number;
        let due = ctx.data().due_date;
        let date = ctx.fmt_date();
        let details_y = 80.0;
        let page = ctx.page();

        page.set_font(Font::Helvetica, 9.0);
        page.set_text_color(Color::BLACK);

        page.text("Invoice Number:", 20.0, details_y);
        page.text(&format!("#{}", number), 60.0, details_y);

        page.text("Date:", 20.0, details_y + 5.0);
        page.text(&date, 60.0, details_y + 5.0);

        page.text("Due Date:", 20.0, details_y + 10.0);
        page.text(&format!("{} days", due), 60.0, details_y + 10.0);
    }

    fn render_table(&self, ctx: &mut RenderContext) {
        let table_start_y = 110.0;

        ctx.page().set_draw_color(Color::BLACK);
        ctx.page().set_line_width(0.3);
        ctx.page()
            .line(15.0, table_start_y - 2.0, 195.0, table_start_y - 2.0);
        ctx.page()
            .line(15.0, table_start_y + 8.0, 195.0, table_start_y + 8.0);

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::BLACK);
        ctx.page().text("Description", 20.0, table_start_y + 3.0);
        ctx.page().text("Qty", 105.0, table_start_y + 3.0);
        ctx.page().text("Rate", 130.0, table_start_y + 3.0);
        ctx.page().text("Amount", 165.0, table_start_y + 3.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        let mut current_y = table_start_y + 15.0;

        for (index, item) in ctx.data().items.iter().enumerate() {
            let description_lines = ctx.wrap_text(&item.description, 75.0);
            let item_h = ctx.item_height(&item.description, 75.0);
            let rate = ctx.fmt_currency(item.rate);
            let amount = ctx.fmt_currency(item.amount());

            if index % 2 == 0 {
                ctx.page().set_fill_color(light_gray());
                ctx.page()
                    .rect(15.0, current_y - 2.0, 180.0, item_h + 4.0, Paint::Fill);
            }

            ctx.page()
                .text_lines(&description_lines, 20.0, current_y + 1.0, LINE_HEIGHT);
            ctx.page()
                .text(&fmt_qty(item.quantity), 105.0, current_y + 1.0);
            ctx.page().text(&rate, 130.0, current_y + 1.0);
            ctx.page().text(&amount, 165.0, current_y + 1.0);

            current_y += item_h + 5.0;
        }

        ctx.page().line(15.0, current_y, 195.0, current_y);
        ctx.set_cursor(current_y);
    }

    fn render_total(&self, ctx: &mut RenderContext) {
        let total_y = ctx.cursor() + SECTION_SPACING;
        let amount = ctx.fmt_currency(ctx.data().total);
        let page = ctx.page();

        page.set_draw_color(Color::BLACK);
        page.set_line_width(0.5);
        page.line(120.0, total_y - 2.0, 195.0, total_y - 2.0);

        page.set_font(Font::HelveticaBold, 12.0);
        page.set_text_color(Color::BLACK);
        page.text("TOTAL:", 130.0, total_y + 5.0);
        page.text(&amount, 165.0, total_y + 5.0);

        page.line(120.0, total_y + 8.0, 195.0, total_y + 8.0);
        ctx.set_cursor(total_y + 8.0);
    }

    fn render_note(&self, ctx: &mut RenderContext) {
        let Some(note) = ctx.data().note.clone() else {
            return;
        };
        let note_y = ctx.cursor() + SECTION_SPACING;

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::BLACK);
        ctx.page().text("Notes:", 20.0, note_y);

        ctx.page().set_font(Font::Helvetica, 9.0);
        let note_lines = ctx.wrap_text(&note, 170.0);
        let bottom = note_y + 5.0 + note_lines.len() as f64 * LINE_HEIGHT;
        ctx.page()
            .text_lines(&note_lines, 20.0, note_y + 5.0, LINE_HEIGHT);
        ctx.set_cursor(bottom);
    }

    fn render_footer(&self, ctx: &mut RenderContext) {
        let footer_y = 270.0;
        let email = ctx.data().from_email.clone();
        let year = ctx.footer_year();
        let page = ctx.page();

        page.set_draw_color(Color::BLACK);
        page.set_line_width(0.3);
        page.line(15.0, footer_y, 195.0, footer_y);

        page.set_font(Font::Helvetica, 8.0);
        page.set_text_color(Color::rgb8(100, 100, 100));
        page.text("Thank you for your business!", 20.0, footer_y + 8.0);
        page.text(
            &format!("Generated by Faktur - {}", year),
            20.0,
            footer_y + 12.0,
        );

        page.text(&format!("Contact: {}", email), 120.0, footer_y + 8.0);
    }
}
