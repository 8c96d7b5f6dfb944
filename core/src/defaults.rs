//! Centralized divider defaults
//!
//! Shared by the interactive prompts and the one-shot command line so both
//! entry points render the same divider when nothing is specified.

/// Decorator used when none is given
pub const DECORATOR: &str = "·";

/// Total line length, including the leading `"# "`
pub const LINE_LENGTH: usize = 120;

/// Number of lines in a solid box
pub const HEIGHT: usize = 3;

/// Smallest line length an outline box accepts
pub const MIN_OUTLINE_LINE_LENGTH: usize = 10;

/// Smallest height a solid box accepts
pub const MIN_SOLID_HEIGHT: usize = 1;

/// Prefix written before every divider line
pub const COMMENT_PREFIX: &str = "# ";

/// Largest line length either layout accepts
pub const MAX_LINE_LENGTH: usize = 4096;

/// Largest height a solid box accepts
pub const MAX_SOLID_HEIGHT: usize = 1024;
