//! Solid box: border lines with one line replaced by centered content.

use super::text::display_width;
use super::{check_at_most, DividerSpec};
use crate::defaults::{COMMENT_PREFIX, MAX_LINE_LENGTH, MAX_SOLID_HEIGHT, MIN_SOLID_HEIGHT};
use crate::{Error, Result};

/// Side fill used for odd-width content.
///
/// Unlike the even branch this does not depend on the line length or the
/// content, so odd-width content produces a center line narrower (or wider)
/// than the border lines.
const ODD_SIDE_LENGTH: usize = 5 / 2;

/// Render `spec` as a solid box of `spec.height` lines.
pub fn render(spec: &DividerSpec) -> Result<Vec<String>> {
    if spec.height < MIN_SOLID_HEIGHT {
        tracing::warn!(height = spec.height, "solid box height too small");
        return Err(Error::InvalidConfiguration(format!(
            "height must be at least {} (got {})",
            MIN_SOLID_HEIGHT, spec.height
        )));
    }
    check_at_most("height", spec.height, MAX_SOLID_HEIGHT)?;
    check_at_most("line length", spec.line_length, MAX_LINE_LENGTH)?;

    let content_length = display_width(&spec.content);
    if content_length + 4 > spec.line_length {
        tracing::warn!(
            content_length,
            line_length = spec.line_length,
            "content too long for solid box"
        );
        return Err(Error::InvalidConfiguration(format!(
            "text is too long for the specified width ({} columns, at most {} fit in {})",
            content_length,
            spec.line_length.saturating_sub(4),
            spec.line_length
        )));
    }

    let side_length = side_length(content_length, spec.line_length);
    let side = spec.decorator.repeat(side_length);
    let centered = format!("{}{side} {} {side}", COMMENT_PREFIX, spec.content);
    let border = format!(
        "{}{}",
        COMMENT_PREFIX,
        spec.decorator.repeat(spec.line_length - 2)
    );

    let mut lines = vec![border; spec.height];
    lines[spec.height / 2] = centered;

    tracing::debug!(height = spec.height, side_length, "rendered solid divider");
    Ok(lines)
}

/// Number of decorator repetitions on each side of the content.
///
/// Callers guarantee `content_length + 4 <= line_length`.
fn side_length(content_length: usize, line_length: usize) -> usize {
    if content_length % 2 == 0 {
        (line_length - content_length - 4) / 2
    } else {
        ODD_SIDE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(decorator: &str, height: usize, line_length: usize, content: &str) -> DividerSpec {
        DividerSpec::new(content)
            .with_decorator(decorator)
            .with_height(height)
            .with_line_length(line_length)
    }

    #[test]
    fn test_even_content_is_centered() {
        let lines = render(&spec("#", 3, 20, "hi")).unwrap();
        assert_eq!(
            lines,
            vec![
                "# ##################",
                "# ####### hi #######",
                "# ##################",
            ]
        );
        assert!(lines.iter().all(|l| l.len() == 20));
    }

    #[test]
    fn test_odd_content_uses_fixed_side_length() {
        let lines = render(&spec("#", 3, 20, "abc")).unwrap();
        assert_eq!(lines[1], "# ## abc ##");
        assert_eq!(lines[0].len(), 20);
        assert_eq!(lines[1].len(), 11);

        let wide = render(&spec("#", 3, 80, "abc")).unwrap();
        assert_eq!(wide[1], "# ## abc ##");
    }

    #[test]
    fn test_single_line_is_only_content() {
        let lines = render(&spec("=", 1, 16, "go")).unwrap();
        assert_eq!(lines, vec!["# ===== go ====="]);
    }

    #[test]
    fn test_content_line_index_is_half_height() {
        let lines = render(&spec("-", 4, 14, "mid")).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "# -- mid --");
        assert!(lines
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .all(|(_, l)| l == "# ------------"));
    }

    #[test]
    fn test_rejects_zero_height() {
        let result = render(&spec("#", 0, 20, "hi"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_huge_dimensions() {
        let result = render(&spec("#", usize::MAX, 20, "hi"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

        let result = render(&spec("#", 3, usize::MAX, "hi"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

        let lines = render(&spec("#", MAX_SOLID_HEIGHT, 20, "hi")).unwrap();
        assert_eq!(lines.len(), MAX_SOLID_HEIGHT);
    }

    #[test]
    fn test_rejects_content_too_long() {
        let result = render(&spec("#", 3, 10, "sevenxx"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

        // Exactly line_length - 4 still fits, with no side fill.
        let lines = render(&spec("#", 3, 10, "sixsix")).unwrap();
        assert_eq!(lines[1], "#  sixsix ");
    }

    #[test]
    fn test_empty_content() {
        let lines = render(&spec("*", 1, 10, "")).unwrap();
        assert_eq!(lines, vec!["# ***  ***"]);
    }

    #[test]
    fn test_multibyte_decorator() {
        let lines = render(&spec("·", 3, 12, "ok")).unwrap();
        assert_eq!(lines[0], "# ··········");
        assert_eq!(lines[1], "# ··· ok ···");
    }
}
