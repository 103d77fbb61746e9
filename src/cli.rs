//! CLI entry for CustomCommands: loads the configuration, starts the host and feeds it input
//! lines either from the command line or from stdin.
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::CommandSender;
use crate::config::PluginConfig;
use crate::host::{CustomCommands, Preprocess};
use crate::internal::namespace::Namespace;
use crate::internal::parser;

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(
    name = "custom-commands",
    about = "CustomCommands: per-actor and global command aliases",
    version
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Folder holding the alias database, overrides the configuration file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Send input as this actor; without it input comes from the console
    #[arg(long, global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Process a single input line")]
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
    #[command(about = "Process input lines from stdin until EOF")]
    Shell,
    #[command(about = "List the aliases of the acting namespace")]
    List,
}

/// Sender backed by the terminal: messages go to stdout.
struct TerminalSender {
    actor: Option<String>,
}

impl CommandSender for TerminalSender {
    fn name(&self) -> &str {
        self.actor.as_deref().unwrap_or("CONSOLE")
    }

    fn identity(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    fn send_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Parse the arguments (the process arguments when `args` is `None`) and run the command.
pub async fn parse(args: Option<&[&str]>) -> anyhow::Result<()> {
    let args = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };
    tracing::debug!("cli args: {:?}", args);

    let mut config = match &args.config {
        Some(path) => PluginConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => PluginConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let host = CustomCommands::startup(config)
        .await
        .context("failed to start CustomCommands")?;
    let sender = TerminalSender { actor: args.actor };

    let result = match args.command {
        Commands::Exec { line } => {
            let line = line.join(" ");
            if process_line(&host, &sender, &line).await {
                Ok(())
            } else {
                Err(anyhow::anyhow!("command failed: {line}"))
            }
        }
        Commands::Shell => run_shell(&host, &sender).await,
        Commands::List => list(&host, &sender).await,
    };

    host.shutdown().await;
    result
}

/// Route one line: administrative commands go to the executor, anything else through
/// alias preprocessing. Returns `false` only when an administrative command failed.
async fn process_line(host: &CustomCommands, sender: &TerminalSender, line: &str) -> bool {
    if parser::parse(line).is_some() {
        return host.on_command(sender, line).await;
    }
    match host.on_preprocess(sender, line).await {
        Preprocess::Replace { command } => println!("{} {}", "dispatch:".green(), command),
        Preprocess::Proceed => println!("{} {}", "proceed:".yellow(), line),
    }
    true
}

async fn run_shell(host: &CustomCommands, sender: &TerminalSender) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        process_line(host, sender, line).await;
    }
    Ok(())
}

async fn list(host: &CustomCommands, sender: &TerminalSender) -> anyhow::Result<()> {
    let ns = Namespace::for_identity(sender.identity())?;
    let entries = host.store().list(&ns).await?;
    if entries.is_empty() {
        println!("no aliases in namespace {ns}");
        return Ok(());
    }
    for entry in entries {
        println!("{} -> {}", entry.alias.green(), entry.command);
    }
    Ok(())
}
