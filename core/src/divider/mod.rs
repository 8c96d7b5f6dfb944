//! Divider layouts and the shared spec they render from.

pub mod outline;
pub mod solid;
pub mod text;

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::{Error, Result};

/// Layout used to render a divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// Border lines with one centered content line
    Solid,
    /// Word-wrapped content inside a bordered frame
    #[default]
    Outline,
}

impl DividerStyle {
    /// Map a numbered menu choice to a style: `1` is solid, anything else outline.
    pub fn from_menu_choice(choice: i64) -> Self {
        if choice == 1 {
            Self::Solid
        } else {
            Self::Outline
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
        }
    }
}

impl fmt::Display for DividerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DividerStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" | "1" => Ok(Self::Solid),
            "outline" | "2" => Ok(Self::Outline),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown divider style '{}' (expected solid or outline)",
                other
            ))),
        }
    }
}

/// Parameters a divider is rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerSpec {
    /// Repeated to draw borders and side fill
    pub decorator: String,
    /// Text placed inside the divider
    pub content: String,
    /// Number of lines (solid boxes only)
    pub height: usize,
    /// Total width of a border line, including the `"# "` prefix
    pub line_length: usize,
}

impl DividerSpec {
    /// Create a spec for `content` with default decorator, height and line length
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            decorator: defaults::DECORATOR.to_string(),
            content: content.into(),
            height: defaults::HEIGHT,
            line_length: defaults::LINE_LENGTH,
        }
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorator = decorator.into();
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }
}

impl Default for DividerSpec {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A divider of a given layout, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divider {
    Outline(DividerSpec),
    Solid(DividerSpec),
}

impl Divider {
    pub fn new(style: DividerStyle, spec: DividerSpec) -> Self {
        match style {
            DividerStyle::Solid => Self::Solid(spec),
            DividerStyle::Outline => Self::Outline(spec),
        }
    }

    pub fn style(&self) -> DividerStyle {
        match self {
            Self::Outline(_) => DividerStyle::Outline,
            Self::Solid(_) => DividerStyle::Solid,
        }
    }

    pub fn spec(&self) -> &DividerSpec {
        match self {
            Self::Outline(spec) | Self::Solid(spec) => spec,
        }
    }

    /// Replace the content, keeping decorator, height and line length.
    pub fn set_content(&mut self, content: impl Into<String>) {
        match self {
            Self::Outline(spec) | Self::Solid(spec) => spec.content = content.into(),
        }
    }

    /// Render the divider.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the spec does not fit
    /// the layout; nothing is produced in that case.
    pub fn render(&self) -> Result<RenderedDivider> {
        let lines = match self {
            Self::Outline(spec) => outline::render(spec)?,
            Self::Solid(spec) => solid::render(spec)?,
        };
        Ok(RenderedDivider { lines })
    }
}

/// Reject `value` above `max`, naming the offending field.
pub(crate) fn check_at_most(field: &str, value: usize, max: usize) -> Result<()> {
    if value > max {
        tracing::warn!(field, value, max, "divider dimension too large");
        return Err(Error::InvalidConfiguration(format!(
            "{} must be at most {} (got {})",
            field, max, value
        )));
    }
    Ok(())
}

/// Rendered divider lines, displayed joined by newlines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDivider {
    lines: Vec<String>,
}

impl RenderedDivider {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in columns
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| text::display_width(l))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for RenderedDivider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
