//! Terminal encoding of the framebuffer.

use tui_starfield::core::types::Attr;
use tui_starfield::core::{draw_text, Canvas};
use tui_starfield::term::{encode_diff_into, encode_full_into, FrameBuffer};

fn printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn full_redraw_contains_every_row() {
    let mut fb = FrameBuffer::new(12, 3);
    draw_text(&mut fb, 0, 0, "top", Attr::Normal);
    draw_text(&mut fb, 2, 0, "bottom", Attr::Bold);

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = printable(&out);
    assert!(text.contains("top"));
    assert!(text.contains("bottom"));
}

#[test]
fn diff_only_writes_changed_cells() {
    let mut before = FrameBuffer::new(20, 4);
    draw_text(&mut before, 1, 1, "Year 1957", Attr::Normal);
    let mut after = before.clone();
    draw_text(&mut after, 1, 1, "Year 1958", Attr::Normal);

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).unwrap();
    let text = printable(&out);
    assert!(text.contains('8'));
    assert!(!text.contains("Year"));
}

#[test]
fn beep_does_not_touch_cells() {
    let mut fb = FrameBuffer::new(4, 2);
    let copy = fb.clone();
    fb.beep();
    assert!(fb.take_bell());
    assert_eq!(fb, copy);
}
