use crate::fonts::Font;
use crate::layout::{LINE_HEIGHT, SECTION_SPACING};
use crate::surface::{Color, Paint};
use crate::template::{RenderContext, Template};

use super::fmt_qty;

/// Dark header and footer bands with red accents, bordered party boxes,
/// a dark details strip, alternating light rows.
pub struct ProfessionalDark;

fn dark() -> Color {
    Color::rgb8(33, 37, 41)
}

fn red_accent() -> Color {
    Color::rgb8(220, 53, 69)
}

fn dark_gray() -> Color {
    Color::rgb8(52, 58, 64)
}

fn off_white() -> Color {
    Color::rgb8(248, 249, 250)
}

impl Template for ProfessionalDark {
    fn render_header(&self, ctx: &mut RenderContext) {
        let name = ctx.data().invoice_name.clone();
        let page = ctx.page();

        page.set_fill_color(dark());
        page.rect(0.0, 0.0, 210.0, 40.0, Paint::Fill);

        page.set_text_color(Color::WHITE);
        page.set_font(Font::HelveticaBold, 26.0);
        page.text(&name, 20.0, 25.0);

        // Accent stripe under the band
        page.set_fill_color(red_accent());
        page.rect(0.0, 35.0, 210.0, 5.0, Paint::Fill);

        page.set_fill_color(dark_gray());
        page.rect(145.0, 10.0, 50.0, 12.0, Paint::Fill);
        page.set_font(Font::HelveticaBold, 11.0);
        page.text_centered("INVOICE", 170.0, 18.0);
    }

    fn render_from_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let from_box_y = 55.0;

        ctx.page().set_fill_color(off_white());
        ctx.page().set_draw_color(dark());
        ctx.page().set_line_width(0.5);
        ctx.page()
            .rect(15.0, from_box_y, 85.0, 35.0, Paint::FillStroke);

        ctx.page().set_font(Font::HelveticaBold, 11.0);
        ctx.page().set_text_color(red_accent());
        ctx.page().text("BILL FROM", 20.0, from_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        ctx.page().set_text_color(dark());

        let mut lines = vec![data.from_name.clone(), data.from_email.clone()];
        lines.extend(ctx.wrap_text(&data.from_address, 75.0));
        ctx.page()
            .text_lines(&lines, 20.0, from_box_y + 13.0, LINE_HEIGHT);
    }

    fn render_client_section(&self, ctx: &mut RenderContext) {
        let data = ctx.data();
        let client_box_y = 55.0;

        ctx.page().set_fill_color(off_white());
        ctx.page().set_draw_color(dark());
        ctx.page().set_line_width(0.5);
        ctx.page()
            .rect(110.0, client_box_y, 85.0, 35.0, Paint::FillStroke);

        ctx.page().set_font(Font::HelveticaBold, 11.0);
        ctx.page().set_text_color(red_accent());
        ctx.page().text("BILL TO", 115.0, client_box_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        ctx.page().set_text_color(dark());

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
        let page = ctx.page();

        page.set_fill_color(dark());
        page.rect(15.0, 100.0, 180.0, 20.0, Paint::Fill);

        page.set_font(Font::Helvetica, 9.0);
        page.set_text_color(Color::WHITE);

        page.text("Invoice #:", 20.0, 108.0);
        page.text(&format!("{}", number), 20.0, 113.0);

        page.text("Issue Date:", 70.0, 108.0);
        page.text(&date, 70.0, 113.0);

        page.text("Due Date:", 120.0, 108.0);
        page.text(&format!("{} days", due), 120.0, 113.0);

        page.text("Currency:", 170.0, 108.0);
        page.text(currency, 170.0, 113.0);
    }

    fn render_table(&self, ctx: &mut RenderContext) {
        let table_start_y = 135.0;

        ctx.page().set_fill_color(dark_gray());
        ctx.page()
            .rect(15.0, table_start_y - 5.0, 180.0, 12.0, Paint::Fill);

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(Color::WHITE);
        ctx.page().text("DESCRIPTION", 20.0, table_start_y);
        ctx.page().text("QTY", 105.0, table_start_y);
        ctx.page().text("RATE", 130.0, table_start_y);
        ctx.page().text("AMOUNT", 165.0, table_start_y);

        ctx.page().set_text_color(dark());
        ctx.page().set_font(Font::Helvetica, 9.0);
        let mut current_y = table_start_y + 10.0;

        for (index, item) in ctx.data().items.iter().enumerate() {
            let description_lines = ctx.wrap_text(&item.description, 75.0);
            let item_h = ctx.item_height(&item.description, 75.0);
            let rate = ctx.fmt_currency(item.rate);
            let amount = ctx.fmt_currency(item.amount());

            let row_fill = if index % 2 == 0 { off_white() } else { Color::WHITE };
            ctx.page().set_fill_color(row_fill);
            ctx.page()
                .rect(15.0, current_y - 3.0, 180.0, item_h + 6.0, Paint::Fill);

            // Subtle divider above each row
            ctx.page().set_draw_color(Color::rgb8(222, 226, 230));
            ctx.page().set_line_width(0.2);
            ctx.page()
                .line(15.0, current_y - 3.0, 195.0, current_y - 3.0);

            ctx.page()
                .text_lines(&description_lines, 20.0, current_y + 2.0, LINE_HEIGHT);
            ctx.page()
                .text(&fmt_qty(item.quantity), 105.0, current_y + 2.0);
            ctx.page().text(&rate, 130.0, current_y + 2.0);

            ctx.page().set_font(Font::HelveticaBold, 9.0);
            ctx.page().text(&amount, 165.0, current_y + 2.0);
            ctx.page().set_font(Font::Helvetica, 9.0);

            current_y += item_h + 4.0;
        }

        ctx.page().set_draw_color(dark());
        ctx.page().set_line_width(0.5);
        ctx.page().line(15.0, current_y, 195.0, current_y);
        ctx.set_cursor(current_y);
    }

    fn render_total(&self, ctx: &mut RenderContext) {
        let total_y = ctx.cursor() + SECTION_SPACING;
        let amount = ctx.fmt_currency(ctx.data().total);
        let currency = ctx.data().currency.as_str();
        let page = ctx.page();

        page.set_fill_color(red_accent());
        page.rect(110.0, total_y, 85.0, 18.0, Paint::Fill);

        page.set_font(Font::HelveticaBold, 13.0);
        page.set_text_color(Color::WHITE);
        page.text("TOTAL", 115.0, total_y + 7.0);
        page.text(&amount, 115.0, total_y + 13.0);

        page.set_font(Font::HelveticaBold, 9.0);
        page.text(&format!("({})", currency), 170.0, total_y + 13.0);
        ctx.set_cursor(total_y + 18.0);
    }

    fn render_note(&self, ctx: &mut RenderContext) {
        let Some(note) = ctx.data().note.clone() else {
            return;
        };
        let note_y = ctx.cursor() + SECTION_SPACING;

        ctx.page().set_fill_color(off_white());
        ctx.page().set_draw_color(dark());
        ctx.page().set_line_width(0.5);
        ctx.page().rect(15.0, note_y, 180.0, 25.0, Paint::FillStroke);

        ctx.page().set_font(Font::HelveticaBold, 10.0);
        ctx.page().set_text_color(red_accent());
        ctx.page().text("NOTES", 20.0, note_y + 8.0);

        ctx.page().set_font(Font::Helvetica, 9.0);
        let note_lines = ctx.wrap_text(&note, 165.0);
        ctx.page().set_text_color(dark());
        ctx.page()
            .text_lines(&note_lines, 20.0, note_y + 13.0, LINE_HEIGHT);
        ctx.set_cursor(note_y + 25.0);
    }

    fn render_footer(&self, ctx: &mut RenderContext) {
        let footer_y = 275.0;
        let email = ctx.data().from_email.clone();
        let year = ctx.footer_year();
        let page = ctx.page();

        page.set_fill_color(dark());
        page.rect(0.0, footer_y - 5.0, 210.0, 25.0, Paint::Fill);

        page.set_font(Font::Helvetica, 8.0);
        page.set_text_color(Color::WHITE);
        page.text("Thank you for choosing our services!", 20.0, footer_y + 5.0);
        page.text(
            &format!("(c) {} Faktur - Professional Invoice Management", year),
            20.0,
            footer_y + 10.0,
        );

        page.text(&format!("Contact: {}", email), 120.0, footer_y + 5.0);
        page.text(
            "This document was generated automatically",
            120.0,
            footer_y + 10.0,
        );
    }
}
