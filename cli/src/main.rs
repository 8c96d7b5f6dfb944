//! Divider CLI - comment banners copied to the clipboard.

mod commands;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;

#[derive(Parser)]
#[command(name = "divider")]
#[command(about = "Generate comment dividers and copy them to the clipboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build dividers from prompts (default)
    Interactive,
    /// Render a single divider from options
    Render(RenderArgs),
}

const DEFAULT_LOG_FILTER: &str = "divider=warn,dividers_core=warn";

/// Filter from `RUST_LOG` directives, falling back to warnings only when
/// they are absent or do not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::run_interactive()?,
        Commands::Render(args) => commands::render_once(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directives_override_default() {
        let filter = log_filter(Some("dividers_core=debug")).to_string();
        assert!(filter.contains("dividers_core=debug"), "{}", filter);
        assert!(!filter.contains("dividers_core=warn"), "{}", filter);
    }

    #[test]
    fn test_default_filter_without_env() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("dividers_core=warn"), "{}", filter);
        assert!(filter.contains("divider=warn"), "{}", filter);
    }
}
