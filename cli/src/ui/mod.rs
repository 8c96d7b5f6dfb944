//! UI utilities for terminal input and output.

mod banner;
mod prompt;

pub use banner::print_menu;
pub use prompt::Prompter;
