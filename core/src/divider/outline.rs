//! Outlined box: word-wrapped content framed by decorator borders.
//!
//! ```text
//! # ······································
//! # · first wrapped line of the content  ·
//! # ·           second line              ·
//! # ······································
//! ```

use super::text::{center, display_width};
use super::{check_at_most, DividerSpec};
use crate::defaults::{COMMENT_PREFIX, MAX_LINE_LENGTH, MIN_OUTLINE_LINE_LENGTH};
use crate::{Error, Result};

/// Columns taken by `"# "`, the side decorators and their inner spaces.
const FRAME_WIDTH: usize = 6;

/// Render `spec` as an outlined box.
pub fn render(spec: &DividerSpec) -> Result<Vec<String>> {
    if spec.line_length < MIN_OUTLINE_LINE_LENGTH {
        tracing::warn!(line_length = spec.line_length, "outline line length too short");
        return Err(Error::InvalidConfiguration(format!(
            "line length must be at least {} (got {})",
            MIN_OUTLINE_LINE_LENGTH, spec.line_length
        )));
    }
    check_at_most("line length", spec.line_length, MAX_LINE_LENGTH)?;

    let wrapped = wrap_words(&spec.content, spec.line_length - 5);
    let border = format!(
        "{}{}",
        COMMENT_PREFIX,
        spec.decorator.repeat(spec.line_length - 2)
    );
    let inner_width = spec.line_length - FRAME_WIDTH;

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(border.clone());
    for line in &wrapped {
        lines.push(format!(
            "{prefix}{deco} {body} {deco}",
            prefix = COMMENT_PREFIX,
            deco = spec.decorator,
            body = center(line, inner_width),
        ));
    }
    lines.push(border);

    tracing::debug!(wrapped = wrapped.len(), "rendered outline divider");
    Ok(lines)
}

/// Greedily pack whitespace-separated words into lines.
///
/// A word starts a new line when the current line, a space and the word
/// together would exceed `limit` columns. The check runs even when the
/// current line is empty, so an oversized first word is preceded by an empty
/// line. The last line is always emitted, which makes empty content produce
/// a single empty line. Words are never split.
pub fn wrap_words(content: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in content.split_whitespace() {
        if display_width(&current) + display_width(word) + 1 > limit {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    lines.push(current);

    lines
}
