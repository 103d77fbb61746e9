//! Durable (namespace, alias) -> template mapping, one SQLite table per namespace.

use sea_orm::{
    ConnectionTrait, DbBackend, DbErr, SqlErr, Statement, TransactionTrait,
};
use tokio::sync::Mutex;

use super::db::DbConnection;
use super::error::{AliasError, Result, StoreError};
use super::model::alias::AliasEntry;
use super::namespace::Namespace;

/*
 * Every statement binds alias and command values as parameters. Table names can't be
 * bound, so they always go through `Namespace::quoted_table`.
 *
 * The `*_with_conn` helpers take any `ConnectionTrait`, so they run either on the
 * pooled connection or inside the transaction opened by `insert`.
 */
pub struct AliasStore {
    db: DbConnection,
    /// Serializes insert/delete so a lookup-then-insert pair can't interleave with another writer.
    write_lock: Mutex<()>,
}

impl AliasStore {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }

    pub fn db(&self) -> &DbConnection {
        &self.db
    }

    pub async fn open(&self) -> std::result::Result<(), StoreError> {
        self.db.open().await
    }

    pub async fn close(&self) -> std::result::Result<(), StoreError> {
        self.db.close().await
    }

    /// Create the table backing `ns` if it doesn't exist yet.
    pub async fn ensure_namespace(&self, ns: &Namespace) -> std::result::Result<(), StoreError> {
        let db = self.db.get().await?;
        Self::ensure_namespace_with_conn(&db, ns).await?;
        Ok(())
    }

    /// Template stored for `alias` in `ns`, if any.
    pub async fn lookup(
        &self,
        ns: &Namespace,
        alias: &str,
    ) -> std::result::Result<Option<String>, StoreError> {
        let db = self.db.get().await?;
        Self::ensure_namespace_with_conn(&db, ns).await?;
        Ok(Self::lookup_with_conn(&db, ns, alias).await?)
    }

    /// Store `template` under `alias`. Fails with [`AliasError::AlreadyExists`] carrying the
    /// current template when the alias is taken; the stored value is left untouched.
    pub async fn insert(&self, ns: &Namespace, alias: &str, template: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let db = self.db.get().await?;
        let txn = db.begin().await?;

        Self::ensure_namespace_with_conn(&txn, ns).await?;
        if let Some(existing) = Self::lookup_with_conn(&txn, ns, alias).await? {
            txn.rollback().await?;
            return Err(AliasError::AlreadyExists {
                alias: alias.to_string(),
                existing,
            });
        }

        let sql = format!(
            "INSERT INTO {} (Alias, Command) VALUES (?, ?)",
            ns.quoted_table()
        );
        let inserted = txn
            .execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                &sql,
                [alias.into(), template.into()],
            ))
            .await;

        match inserted {
            Ok(_) => {
                txn.commit().await?;
                tracing::debug!("alias `{}` stored in namespace {}", alias, ns);
                Ok(())
            }
            // the primary key catches a writer that got in from outside this store
            Err(e) if is_unique_violation(&e) => {
                txn.rollback().await?;
                let existing = Self::lookup_with_conn(&db, ns, alias)
                    .await?
                    .unwrap_or_default();
                Err(AliasError::AlreadyExists {
                    alias: alias.to_string(),
                    existing,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove `alias` from `ns`. Fails with [`AliasError::NotFound`] if it isn't set.
    pub async fn delete(&self, ns: &Namespace, alias: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let db = self.db.get().await?;

        Self::ensure_namespace_with_conn(&db, ns).await?;
        let sql = format!("DELETE FROM {} WHERE Alias = ?", ns.quoted_table());
        let res = db
            .execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                &sql,
                [alias.into()],
            ))
            .await?;

        if res.rows_affected() == 0 {
            return Err(AliasError::NotFound {
                alias: alias.to_string(),
            });
        }
        tracing::debug!("alias `{}` removed from namespace {}", alias, ns);
        Ok(())
    }

    /// All entries of `ns`, ordered by alias.
    pub async fn list(&self, ns: &Namespace) -> std::result::Result<Vec<AliasEntry>, StoreError> {
        let db = self.db.get().await?;
        Self::ensure_namespace_with_conn(&db, ns).await?;

        let sql = format!(
            "SELECT Alias, Command FROM {} ORDER BY Alias",
            ns.quoted_table()
        );
        let rows = db
            .query_all(Statement::from_string(DbBackend::Sqlite, sql))
            .await?;
        let entries = rows
            .iter()
            .map(AliasEntry::from_row)
            .collect::<std::result::Result<Vec<_>, DbErr>>()?;
        Ok(entries)
    }

    async fn ensure_namespace_with_conn<C: ConnectionTrait>(
        conn: &C,
        ns: &Namespace,
    ) -> std::result::Result<(), DbErr> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (Alias TEXT PRIMARY KEY, Command TEXT)",
            ns.quoted_table()
        );
        conn.execute_unprepared(&sql).await?;
        Ok(())
    }

    async fn lookup_with_conn<C: ConnectionTrait>(
        conn: &C,
        ns: &Namespace,
        alias: &str,
    ) -> std::result::Result<Option<String>, DbErr> {
        let sql = format!("SELECT Alias, Command FROM {} WHERE Alias = ?", ns.quoted_table());
        let row = conn
            .query_one(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                &sql,
                [alias.into()],
            ))
            .await?;
        row.map(|r| AliasEntry::from_row(&r).map(|entry| entry.command))
            .transpose()
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
