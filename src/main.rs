//! This is the main entry point for CustomCommands.

use colored::Colorize;
use custom_commands::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::parse(None).await {
        eprintln!("{} {e:#}", "error:".red());
        std::process::exit(1);
    }
}
