//! One-shot render command implementation.

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use dividers_core::{copy_and_echo, defaults, Divider, DividerSpec, DividerStyle, SystemClipboard};

/// Options for rendering a single divider without prompts
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text to place in the divider (words are joined with spaces)
    #[arg(trailing_var_arg = true)]
    pub content: Vec<String>,

    /// Divider layout
    #[arg(short, long, default_value_t = DividerStyle::Outline)]
    pub style: DividerStyle,

    /// Decorator repeated to draw the borders
    #[arg(short, long, default_value = defaults::DECORATOR)]
    pub decorator: String,

    /// Total line length, including the leading "# "
    #[arg(short, long, default_value_t = defaults::LINE_LENGTH)]
    pub line_length: usize,

    /// Number of lines in a solid box
    #[arg(long, default_value_t = defaults::HEIGHT)]
    pub height: usize,

    /// Print the divider without copying it to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

impl RenderArgs {
    fn divider(&self) -> Divider {
        let spec = DividerSpec::new(self.content.join(" "))
            .with_decorator(self.decorator.clone())
            .with_line_length(self.line_length)
            .with_height(self.height);
        Divider::new(self.style, spec)
    }
}

/// Render one divider from command-line options.
pub fn render_once(args: RenderArgs) -> anyhow::Result<()> {
    let rendered = args.divider().render()?;
    let mut stdout = io::stdout().lock();

    if args.no_copy {
        writeln!(stdout, "{}", rendered)?;
        return Ok(());
    }

    let mut clipboard = SystemClipboard::new().context("clipboard unavailable (try --no-copy)")?;
    copy_and_echo(&mut clipboard, &mut stdout, &rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse(argv: &[&str]) -> RenderArgs {
        TestCli::parse_from(std::iter::once("divider").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["hello", "world"]);
        assert_eq!(args.style, DividerStyle::Outline);
        assert_eq!(args.decorator, "·");
        assert_eq!(args.line_length, 120);
        assert_eq!(args.height, 3);
        assert!(!args.no_copy);
        assert_eq!(args.divider().spec().content, "hello world");
    }

    #[test]
    fn test_solid_options() {
        let args = parse(&["-s", "solid", "-d", "#", "-l", "20", "--height", "1", "--no-copy", "hi"]);
        let rendered = args.divider().render().unwrap();
        assert_eq!(rendered.to_string(), "# ####### hi #######");
    }

    #[test]
    fn test_rejects_unknown_style() {
        let result = TestCli::try_parse_from(["divider", "--style", "dotted", "x"]);
        assert!(result.is_err());
    }
}
