//! Menu printing.

use std::io::{self, Write};

/// Print the divider style menu.
pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1. Solid box with specified height")?;
    writeln!(out, "2. Outlined box with height 3")
}
