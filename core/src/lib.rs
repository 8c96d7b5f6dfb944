//! Dividers Core - comment banner rendering library
//!
//! Renders free-form text into fixed-width bordered blocks meant to be pasted
//! into source code as section separators. Two layouts are provided: an
//! outlined box that word-wraps its content, and a solid box that centers a
//! single line of content between border lines.

pub mod clipboard;
pub mod defaults;
pub mod divider;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use clipboard::{copy_and_echo, ClipboardSink, SystemClipboard};
pub use divider::{Divider, DividerSpec, DividerStyle, RenderedDivider};
