use faktur_core::fonts::Font;
use faktur_core::layout::{item_height, wrap_text, LINE_HEIGHT, MIN_ITEM_HEIGHT};

const FONT: Font = Font::Helvetica;
const SIZE: f64 = 9.0;
const WIDTH: f64 = 75.0;

#[test]
fn wrapping_is_idempotent() {
    let text = "Full brand identity design including logo exploration, typography \
                system, color palette documentation, and stationery templates";
    let lines = wrap_text(text, WIDTH, FONT, SIZE);
    assert!(lines.len() > 1);
    for line in &lines {
        assert_eq!(wrap_text(line, WIDTH, FONT, SIZE), vec![line.clone()]);
    }
}

#[test]
fn wrapped_lines_preserve_every_word_in_order() {
    let text = "one two three four five six seven eight nine ten eleven twelve \
                thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty";
    let lines = wrap_text(text, 30.0, FONT, SIZE);
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
}

#[test]
fn narrower_width_never_yields_fewer_lines() {
    let text = "Landing page implementation with responsive layout and dark mode support";
    let mut previous = 0;
    for width in [120.0, 90.0, 60.0, 40.0, 25.0] {
        let n = wrap_text(text, width, FONT, SIZE).len();
        assert!(n >= previous, "width {} gave {} lines (< {})", width, n, previous);
        previous = n;
    }
}

#[test]
fn oversized_word_stays_unsplit_on_its_own_line() {
    let text = "see https://example.com/very/long/path/that/never/fits/in/a/column ok";
    let lines = wrap_text(text, 20.0, FONT, SIZE);
    assert!(lines
        .iter()
        .any(|l| l == "https://example.com/very/long/path/that/never/fits/in/a/column"));
}

#[test]
fn multibyte_text_wraps_without_splitting_words() {
    let text = "Pembuatan desain identitas merek untuk perusahaan ritel terkemuka";
    let lines = wrap_text(text, 40.0, FONT, SIZE);
    for line in &lines {
        for word in line.split_whitespace() {
            assert!(text.contains(word));
        }
    }
}

#[test]
fn blank_description_still_occupies_one_line() {
    assert_eq!(wrap_text("", WIDTH, FONT, SIZE), vec![String::new()]);
    assert_eq!(item_height("", WIDTH, FONT, SIZE), MIN_ITEM_HEIGHT);
}

#[test]
fn explicit_newlines_force_breaks() {
    let lines = wrap_text("first\nsecond\nthird", WIDTH, FONT, SIZE);
    assert_eq!(lines, vec!["first", "second", "third"]);
}

#[test]
fn item_height_grows_with_line_count_but_never_below_minimum() {
    let short = item_height("Design", WIDTH, FONT, SIZE);
    assert_eq!(short, MIN_ITEM_HEIGHT);

    let long = "a description long enough to wrap across at least three separate \
                lines when measured at nine points in a seventy five millimetre \
                column of regular weight text";
    let lines = wrap_text(long, WIDTH, FONT, SIZE).len() as f64;
    assert!(lines >= 3.0);
    assert_eq!(item_height(long, WIDTH, FONT, SIZE), lines * LINE_HEIGHT);
}
