//! Column measurement and padding helpers.

use unicode_width::UnicodeWidthStr;

/// Visual width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with spaces on both sides to `width` columns.
///
/// When the padding is odd the extra space goes on the right. Text already
/// at least `width` columns wide is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let left = padding / 2;
    let right = padding - left;

    let mut out = String::with_capacity(text.len() + padding);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}
