use griddle::text::{align_offset, char_width, display_width, truncate_to_width};
use griddle::Alignment;

#[test]
fn test_display_width_counts_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_shorter_text_unchanged() {
    assert_eq!(truncate_to_width("abc", 10), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate_to_width("Hello, world", 8), "Hello, …");
    assert!(display_width(&truncate_to_width("Hello, world", 8)) <= 8);
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_truncate_respects_wide_chars() {
    let truncated = truncate_to_width("日本語", 4);
    assert_eq!(truncated, "日…");
    assert!(display_width(&truncated) <= 4);
}

#[test]
fn test_align_offsets() {
    assert_eq!(align_offset(4, 10, Alignment::Left), 0);
    assert_eq!(align_offset(4, 10, Alignment::Center), 3);
    assert_eq!(align_offset(4, 10, Alignment::Right), 6);
}

#[test]
fn test_align_offset_overflowing_text() {
    assert_eq!(align_offset(12, 10, Alignment::Right), 0);
    assert_eq!(align_offset(10, 10, Alignment::Center), 0);
}
