//! `alias "<alias>" as "<command>"` and `alias "<alias>"`: create and remove aliases in the
//! sender's namespace (the global one for the console).

use super::{CommandSender, MESSAGE_PREFIX};
use crate::internal::error::AliasError;
use crate::internal::namespace::Namespace;
use crate::internal::parser::{self, AdminCommand};
use crate::internal::store::AliasStore;

/// Parse `line` and run the administrative command it names.
/// Returns `false` when the line isn't administrative or the command failed.
pub async fn execute(store: &AliasStore, sender: &dyn CommandSender, line: &str) -> bool {
    match parser::parse(line) {
        Some(AdminCommand::Define { alias, command }) => {
            define(store, sender, &alias, &command).await
        }
        Some(AdminCommand::Remove { alias }) => remove(store, sender, &alias).await,
        None => false,
    }
}

pub async fn define(
    store: &AliasStore,
    sender: &dyn CommandSender,
    alias: &str,
    command: &str,
) -> bool {
    if alias.is_empty() {
        sender.send_message(&format!("{MESSAGE_PREFIX} Error: An alias can't be empty."));
        return false;
    }

    let result = match Namespace::for_identity(sender.identity()) {
        Ok(ns) => store.insert(&ns, alias, command).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {
            sender.send_message(&format!("{MESSAGE_PREFIX} Alias \"{alias}\" set to:"));
            sender.send_message(command);
            true
        }
        Err(AliasError::AlreadyExists { existing, .. }) => {
            sender.send_message(&format!(
                "{MESSAGE_PREFIX} Error: That alias is already set to:"
            ));
            sender.send_message(&existing);
            false
        }
        Err(e) => {
            sender.send_message(&format!(
                "{MESSAGE_PREFIX} {} occurred creating that alias.",
                e.kind()
            ));
            tracing::warn!(
                sender = sender.name(),
                identity = ?sender.identity(),
                alias,
                command,
                error = %e,
                "failed to create alias"
            );
            false
        }
    }
}

pub async fn remove(store: &AliasStore, sender: &dyn CommandSender, alias: &str) -> bool {
    let result = match Namespace::for_identity(sender.identity()) {
        Ok(ns) => store.delete(&ns, alias).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {
            sender.send_message(&format!("{MESSAGE_PREFIX} Alias \"{alias}\" removed."));
            true
        }
        Err(AliasError::NotFound { .. }) => {
            sender.send_message(&format!(
                "{MESSAGE_PREFIX} Error: The alias \"{alias}\" isn't set to anything."
            ));
            false
        }
        Err(e) => {
            sender.send_message(&format!(
                "{MESSAGE_PREFIX} {} occurred deleting that alias.",
                e.kind()
            ));
            tracing::warn!(
                sender = sender.name(),
                identity = ?sender.identity(),
                alias,
                error = %e,
                "failed to delete alias"
            );
            false
        }
    }
}
