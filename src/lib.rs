//! CustomCommands: per-actor and global command aliases.
//!
//! An actor defines `alias "hp" as "give {0} potion"`; typing `hp diamond` afterwards is
//! rewritten to `give diamond potion` before the host executes it. Aliases live in a SQLite
//! database, one table per actor plus a shared global table.

pub mod cli;
pub mod command;
pub mod config;
pub mod host;
pub mod internal;
pub mod utils;

pub use config::PluginConfig;
pub use host::{CustomCommands, Preprocess};
