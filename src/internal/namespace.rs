//! Alias namespaces: one table per actor plus the shared global table.

use std::fmt::{Display, Formatter};

use super::error::StoreError;

/// Table holding aliases visible to everyone, and the only one consulted for console input.
pub const GLOBAL_TABLE_NAME: &str = "GLOBAL_COMMAND_ALIAS_TABLE";

/// Prefix of every actor table. The actor name follows hex encoded, so table names are
/// distinct under SQLite's case-insensitive identifier matching and never start with `sqlite_`.
pub const ACTOR_TABLE_PREFIX: &str = "ACTOR_";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    Global,
    Actor(String),
}

impl Namespace {
    /// Namespace private to the actor `name`.
    ///
    /// Empty names and the reserved global table name (in any case) are rejected.
    pub fn actor(name: impl Into<String>) -> Result<Self, StoreError> {
        let name = name.into();
        if name.is_empty() || name.eq_ignore_ascii_case(GLOBAL_TABLE_NAME) {
            return Err(StoreError::InvalidNamespace(name));
        }
        Ok(Namespace::Actor(name))
    }

    /// The actor's namespace when there is an identity, the global one for console input.
    pub fn for_identity(identity: Option<&str>) -> Result<Self, StoreError> {
        match identity {
            Some(name) => Self::actor(name),
            None => Ok(Namespace::Global),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Namespace::Global)
    }

    /// Name of the backing table: `ACTOR_<hex of the name>` for actors.
    pub fn table_name(&self) -> String {
        match self {
            Namespace::Global => GLOBAL_TABLE_NAME.to_string(),
            Namespace::Actor(name) => format!("{ACTOR_TABLE_PREFIX}{}", hex::encode(name)),
        }
    }

    /// The table name as a double-quoted SQL identifier.
    ///
    /// Identifiers can't be bound as statement parameters, so embedded quotes are doubled.
    pub(crate) fn quoted_table(&self) -> String {
        format!("\"{}\"", self.table_name().replace('"', "\"\""))
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Namespace::Global => write!(f, "global"),
            Namespace::Actor(name) => write!(f, "{name}"),
        }
    }
}
