//! CLI command implementations.

mod interactive;
mod render;

pub use interactive::run_interactive;
pub use render::{render_once, RenderArgs};
