use sea_orm::{DbErr, QueryResult};
use serde::{Deserialize, Serialize};

/// One row of a namespace table: `Alias TEXT PRIMARY KEY, Command TEXT`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub command: String, // the template, may contain `{N}` placeholders
}

impl AliasEntry {
    pub const ALIAS_COLUMN: &'static str = "Alias";
    pub const COMMAND_COLUMN: &'static str = "Command";

    /// Parse an entry from a query row
    pub fn from_row(row: &QueryResult) -> Result<Self, DbErr> {
        Ok(Self {
            alias: row.try_get("", Self::ALIAS_COLUMN)?,
            command: row.try_get("", Self::COMMAND_COLUMN)?,
        })
    }
}
