//! Interactive command implementation.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use dividers_core::{copy_and_echo, defaults, ClipboardSink, Divider, DividerSpec, DividerStyle, Error, SystemClipboard};

use crate::ui::{print_menu, Prompter};

const AGAIN_PROMPT: &str = "Enter another value to run again, 'r' to restart, or enter 'q' to quit: ";

/// Run the interactive flow on the terminal, copying to the system clipboard.
pub fn run_interactive() -> anyhow::Result<()> {
    let mut clipboard = SystemClipboard::new().context("clipboard unavailable")?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());

    run_session(&mut prompter, &mut clipboard)
}

/// Configure a divider, render it, then keep re-rendering with new content.
///
/// `q` or end of input stops the session; `r` starts over from the style menu.
pub(crate) fn run_session<R, W, S>(prompter: &mut Prompter<R, W>, sink: &mut S) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    S: ClipboardSink + ?Sized,
{
    'configure: loop {
        let Some(mut divider) = configure(prompter)? else {
            return Ok(());
        };
        show(prompter.out(), sink, &divider)?;

        loop {
            let Some(input) = prompter.ask(AGAIN_PROMPT)? else {
                return Ok(());
            };
            match input.as_str() {
                "q" => return Ok(()),
                "r" => {
                    tracing::debug!("restarting configuration");
                    continue 'configure;
                }
                _ => {
                    divider.set_content(input);
                    show(prompter.out(), sink, &divider)?;
                }
            }
        }
    }
}

/// Prompt for style, content, decorator, line length and (solid only) height.
///
/// Returns `None` if input ends before the divider is fully described.
fn configure<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> anyhow::Result<Option<Divider>> {
    print_menu(prompter.out())?;

    let Some(choice) = prompter.ask("Enter choice: ")? else {
        return Ok(None);
    };
    let choice: i64 = choice
        .trim()
        .parse()
        .with_context(|| format!("invalid choice: '{}'", choice.trim()))?;
    let style = DividerStyle::from_menu_choice(choice);

    let Some(content) = prompter.ask("Enter text to be centered in your divider: ")? else {
        return Ok(None);
    };
    let Some(decorator) = prompter.ask_or(
        &format!("Enter decorator (enter for {}): ", defaults::DECORATOR),
        defaults::DECORATOR,
    )?
    else {
        return Ok(None);
    };
    let Some(line_length) = prompter.ask_number(
        &format!("Enter line length (enter for {}): ", defaults::LINE_LENGTH),
        defaults::LINE_LENGTH,
    )?
    else {
        return Ok(None);
    };

    let height = match style {
        DividerStyle::Solid => {
            let Some(height) = prompter.ask_number(
                &format!("Enter height (enter for {}): ", defaults::HEIGHT),
                defaults::HEIGHT,
            )?
            else {
                return Ok(None);
            };
            height
        }
        DividerStyle::Outline => defaults::HEIGHT,
    };

    let spec = DividerSpec::new(content)
        .with_decorator(decorator)
        .with_line_length(line_length)
        .with_height(height);
    tracing::debug!(?spec, %style, "configured divider");

    Ok(Some(Divider::new(style, spec)))
}

/// Render and copy `divider`, reporting configuration errors without stopping.
fn show<W, S>(out: &mut W, sink: &mut S, divider: &Divider) -> anyhow::Result<()>
where
    W: Write,
    S: ClipboardSink + ?Sized,
{
    match divider.render() {
        Ok(rendered) => copy_and_echo(sink, out, &rendered)?,
        Err(e @ Error::InvalidConfiguration(_)) => {
            writeln!(out, "\x1b[1;31m✗\x1b[0m {}", e)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
