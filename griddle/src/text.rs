use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::style::Alignment;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate `s` to at most `max_width` terminal columns, replacing the
/// tail with an ellipsis when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target_width {
            break;
        }
        result.push(ch);
        width += w;
    }

    result.push('…');
    result
}

/// Column offset that places text of `text_width` inside `available_width`.
pub fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Alignment::Left => 0,
        Alignment::Center => (available_width - text_width) / 2,
        Alignment::Right => available_width - text_width,
    }
}
