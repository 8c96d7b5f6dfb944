//! Clipboard output for rendered dividers

use std::io::Write;

use arboard::Clipboard as ArboardClipboard;

use crate::divider::RenderedDivider;
use crate::{Error, Result};

/// Destination for rendered divider text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard.
///
/// The handle is kept open for the lifetime of the value; on X11 and Wayland
/// the copied text is only served while a handle exists.
pub struct SystemClipboard {
    clipboard: ArboardClipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = ArboardClipboard::new()
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Copy `divider` to `sink` and echo it to `out`.
pub fn copy_and_echo<S, W>(sink: &mut S, out: &mut W, divider: &RenderedDivider) -> Result<()>
where
    S: ClipboardSink + ?Sized,
    W: Write + ?Sized,
{
    let text = divider.to_string();
    sink.copy(&text)?;
    tracing::info!(lines = divider.height(), "copied divider to clipboard");

    writeln!(out, "Copied to clipboard:\n{}\n", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Divider, DividerSpec, DividerStyle};

    #[derive(Default)]
    struct RecordingSink {
        copied: Vec<String>,
    }

    impl ClipboardSink for RecordingSink {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl ClipboardSink for FailingSink {
        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("no display".to_string()))
        }
    }

    fn sample() -> RenderedDivider {
        Divider::new(
            DividerStyle::Solid,
            DividerSpec::new("hi").with_decorator("#").with_line_length(20),
        )
        .render()
        .unwrap()
    }

    #[test]
    fn test_copy_and_echo() {
        let mut sink = RecordingSink::default();
        let mut out = Vec::new();
        let divider = sample();

        copy_and_echo(&mut sink, &mut out, &divider).unwrap();

        let text = divider.to_string();
        assert_eq!(sink.copied, vec![text.clone()]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Copied to clipboard:\n{}\n\n", text)
        );
    }

    #[test]
    fn test_failed_copy_writes_nothing() {
        let mut out = Vec::new();
        let result = copy_and_echo(&mut FailingSink, &mut out, &sample());
        assert!(matches!(result, Err(Error::Clipboard(_))));
        assert!(out.is_empty());
    }
}
