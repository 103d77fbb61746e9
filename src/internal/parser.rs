//! Recognizes the two administrative forms in a raw command line.

use once_cell::sync::Lazy;
use regex::Regex;

static DEFINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^/?alias "(.*)" as "(.*)"$"#).expect("Invalid Regex"));
static REMOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^/?alias "(.*)"$"#).expect("Invalid Regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// `alias "<alias>" as "<command>"`
    Define { alias: String, command: String },
    /// `alias "<alias>"`
    Remove { alias: String },
}

impl AdminCommand {
    pub fn alias(&self) -> &str {
        match self {
            AdminCommand::Define { alias, .. } | AdminCommand::Remove { alias } => alias,
        }
    }
}

/// Parse `line` as an administrative command, `None` if it is ordinary input.
///
/// Both forms must match the whole line and are case-sensitive. The define form is tried
/// first since the remove pattern would otherwise swallow its `as` clause.
pub fn parse(line: &str) -> Option<AdminCommand> {
    if let Some(caps) = DEFINE_RE.captures(line) {
        return Some(AdminCommand::Define {
            alias: caps[1].to_string(),
            command: caps[2].to_string(),
        });
    }
    REMOVE_RE.captures(line).map(|caps| AdminCommand::Remove {
        alias: caps[1].to_string(),
    })
}
