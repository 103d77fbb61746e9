use std::path::{Path, PathBuf};

use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};
use tokio::sync::Mutex;

use super::error::StoreError;

/// Lifecycle of the process-wide connection.
///
/// Transitions only happen while the state mutex is held, so `Opening` and `Closing`
/// are visible to other callers only when a transition was abandoned midway.
enum ConnectionState {
    Closed,
    Opening,
    Open(DatabaseConnection),
    Closing,
}

impl ConnectionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open(_) => "open",
            Self::Closing => "closing",
        }
    }
}

/// Wrapper around the SQLite database file holding every alias table.
pub struct DbConnection {
    path: PathBuf,
    state: Mutex<ConnectionState>,
}

impl DbConnection {
    /// Create a handle for the database at `db_path`. Nothing is opened yet.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            path: db_path.into(),
            state: Mutex::new(ConnectionState::Closed),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the connection. A no-op when already open.
    pub async fn open(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if let ConnectionState::Open(_) = &*state {
            return Ok(());
        }
        tracing::debug!("opening alias database {:?} (was {})", self.path, state.name());
        *state = ConnectionState::Opening;

        match connect(&self.path).await {
            Ok(conn) => {
                *state = ConnectionState::Open(conn);
                Ok(())
            }
            Err(e) => {
                *state = ConnectionState::Closed;
                Err(e)
            }
        }
    }

    /// Close the connection. A no-op when already closed.
    pub async fn close(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let conn = match std::mem::replace(&mut *state, ConnectionState::Closing) {
            ConnectionState::Open(conn) => conn,
            _ => {
                *state = ConnectionState::Closed;
                return Ok(());
            }
        };
        tracing::debug!("closing alias database {:?}", self.path);

        let result = conn.close().await.map_err(StoreError::from);
        *state = ConnectionState::Closed;
        result
    }

    pub async fn is_open(&self) -> bool {
        matches!(&*self.state.lock().await, ConnectionState::Open(_))
    }

    /// Handle to the open pool. The lifecycle lock is released before the handle is used,
    /// so concurrent readers don't queue behind each other here.
    pub async fn get(&self) -> Result<DatabaseConnection, StoreError> {
        match &*self.state.lock().await {
            ConnectionState::Open(conn) => Ok(conn.clone()),
            _ => Err(StoreError::NotOpen),
        }
    }
}

async fn connect(db_path: &Path) -> Result<DatabaseConnection, StoreError> {
    if !db_path.exists() {
        return Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("database file does not exist: {}", db_path.display()),
        )));
    }

    // a filename, not a URL: `?`, `#` and `%` in the path are taken literally
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .disable_statement_logging();
    // one connection: SQLite allows a single writer anyway
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Create the database file at `db_path` and open a connection to it.
/// Fails if the file already exists.
pub async fn create_database(db_path: &Path) -> Result<DbConnection, StoreError> {
    if db_path.exists() {
        return Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "Database file already exists.",
        )));
    }
    std::fs::File::create(db_path)?;

    let conn = DbConnection::new(db_path);
    conn.open().await?;
    Ok(conn)
}
