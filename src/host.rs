//! Host-facing facade: lifecycle plus the two hooks a command pipeline calls into.

use std::sync::Arc;

use crate::command::{self, CommandSender, MESSAGE_PREFIX};
use crate::config::PluginConfig;
use crate::internal::db::DbConnection;
use crate::internal::error::StoreError;
use crate::internal::resolver::{self, AliasResolver, Resolution};
use crate::internal::store::AliasStore;
use crate::utils::path;

/// What the host should do with a line after preprocessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preprocess {
    /// Let the original input through unchanged.
    Proceed,
    /// Cancel the original input and dispatch `command` for the same sender.
    Replace { command: String },
}

pub struct CustomCommands {
    config: PluginConfig,
    store: Arc<AliasStore>,
    resolver: AliasResolver,
}

impl CustomCommands {
    /// Prepare the data directory and database file, then open the store.
    pub async fn startup(config: PluginConfig) -> Result<Self, StoreError> {
        if let Err(e) = path::prepare_data_dir(&config.data_dir) {
            tracing::error!("could not create data folder {:?}: {}", config.data_dir, e);
            return Err(e.into());
        }
        let db_path = config.database_path();
        if let Err(e) = path::prepare_database_file(&db_path) {
            tracing::error!("could not create database {:?}: {}", db_path, e);
            return Err(e.into());
        }

        let store = Arc::new(AliasStore::new(DbConnection::new(db_path)));
        if let Err(e) = store.open().await {
            tracing::error!("could not open database connection: {}", e);
            return Err(e);
        }
        tracing::debug!("CustomCommands started with data folder {:?}", config.data_dir);

        Ok(Self {
            config,
            resolver: AliasResolver::new(store.clone()),
            store,
        })
    }

    /// Close the store. Safe to call more than once.
    pub async fn shutdown(&self) {
        if let Err(e) = self.store.close().await {
            tracing::error!("could not close database connection: {}", e);
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<AliasStore> {
        &self.store
    }

    /// Executor for the administrative commands. `false` if `line` isn't one or it failed.
    pub async fn on_command(&self, sender: &dyn CommandSender, line: &str) -> bool {
        command::alias::execute(&self.store, sender, line).await
    }

    /// Rewrite `line` if its first token is an alias visible to `sender`.
    ///
    /// Failures are reported to the sender and logged; the original input then proceeds.
    pub async fn on_preprocess(&self, sender: &dyn CommandSender, line: &str) -> Preprocess {
        match self.resolver.resolve(sender.identity(), line).await {
            Ok(Resolution::Expanded(expansion)) => Preprocess::Replace {
                command: expansion.command,
            },
            Ok(Resolution::NoAlias) => Preprocess::Proceed,
            Err(e) => {
                sender.send_message(&format!(
                    "{MESSAGE_PREFIX} {} occurred handling that command.",
                    e.kind()
                ));
                tracing::warn!(
                    sender = sender.name(),
                    identity = ?sender.identity(),
                    alias = ?resolver::tokenize(line).first(),
                    command = line,
                    error = %e,
                    "failed to resolve alias"
                );
                Preprocess::Proceed
            }
        }
    }
}
