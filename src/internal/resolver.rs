//! Matches the first token of an input line against stored aliases and expands it.

use std::sync::Arc;

use super::error::Result;
use super::namespace::Namespace;
use super::store::AliasStore;
use super::template;

/// A successful match: which namespace supplied the alias and what it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub namespace: Namespace,
    pub alias: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing matched; the original input should proceed unmodified.
    NoAlias,
    /// The original input should be suppressed and `command` dispatched instead.
    Expanded(Expansion),
}

/// Split an input line into whitespace-delimited tokens, dropping one leading `/`
/// from the first token.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if let Some(first) = tokens.first_mut() {
        let token = *first;
        *first = token.strip_prefix('/').unwrap_or(token);
    }
    tokens
}

pub struct AliasResolver {
    store: Arc<AliasStore>,
}

impl AliasResolver {
    pub fn new(store: Arc<AliasStore>) -> Self {
        Self { store }
    }

    /// Resolve a raw input line for `identity` (`None` for console input).
    pub async fn resolve(&self, identity: Option<&str>, line: &str) -> Result<Resolution> {
        self.resolve_tokens(identity, &tokenize(line)).await
    }

    /// Resolve already tokenized input. The actor's namespace is consulted first, then the
    /// global one; input without an identity only ever sees global aliases.
    pub async fn resolve_tokens(
        &self,
        identity: Option<&str>,
        tokens: &[&str],
    ) -> Result<Resolution> {
        let Some(&alias) = tokens.first() else {
            return Ok(Resolution::NoAlias);
        };

        let mut scopes = Vec::with_capacity(2);
        if identity.is_some() {
            scopes.push(Namespace::for_identity(identity)?);
        }
        scopes.push(Namespace::Global);

        for namespace in scopes {
            let Some(template) = self.store.lookup(&namespace, alias).await? else {
                continue;
            };
            let command = template::expand(&template, tokens)?;
            tracing::debug!(
                "expanded `{}` from namespace {} to `{}`",
                alias,
                namespace,
                command
            );
            return Ok(Resolution::Expanded(Expansion {
                namespace,
                alias: alias.to_string(),
                command,
            }));
        }
        Ok(Resolution::NoAlias)
    }
}
