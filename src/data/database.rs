use std::path::PathBuf;

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    SqlxSqliteConnector, Statement, TransactionTrait, TryGetable, Value,
};
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::error::{lifecycle::LifecycleError, AppError};
use crate::state::DataPaths;

/// File name of the SQLite database inside the dynamic directory.
const DATABASE_FILE: &str = "database.sqlite3";

/// Schema script inside the static directory, run on every connect.
const BUILD_SCRIPT: &str = "build.sql";

/// Database operations the lifecycle orchestrator and the commit job rely on.
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    async fn connect(&self) -> Result<(), AppError>;

    /// Commits all writes made since the previous commit.
    async fn commit(&self) -> Result<(), AppError>;

    /// Commits pending writes and releases the connection.
    async fn close(&self) -> Result<(), AppError>;
}

struct Connected {
    conn: DatabaseConnection,
    txn: Option<DatabaseTransaction>,
}

impl Connected {
    /// Returns the open transaction, beginning a new one after a commit.
    async fn transaction(&mut self) -> Result<&DatabaseTransaction, DbErr> {
        match self.txn {
            Some(ref txn) => Ok(txn),
            None => {
                let txn = self.conn.begin().await?;

                Ok(&*self.txn.insert(txn))
            }
        }
    }
}

/// SQLite database stored under the dynamic data directory.
///
/// Uses a single pooled connection so the commit job and event handlers
/// writing to the database are serialised by the pool and by the mutex
/// guarding the open transaction.
pub struct Database {
    paths: DataPaths,
    state: Mutex<Option<Connected>>,
}

impl Database {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            state: Mutex::new(None),
        }
    }

    /// Executes a statement inside the open transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(AppError::LifecycleErr)` - Database is not connected
    /// - `Err(AppError::DbErr)` - Statement failed
    pub async fn execute<I>(&self, sql: &str, values: I) -> Result<u64, AppError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut state = self.state.lock().await;
        let connected = state.as_mut().ok_or(LifecycleError::DatabaseNotConnected)?;
        let txn = connected.transaction().await?;

        let result = txn
            .execute_raw(Statement::from_sql_and_values(DbBackend::Sqlite, sql, values))
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the first column of the first row produced by a query.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Query produced a row
    /// - `Ok(None)` - Query produced no rows
    /// - `Err(AppError)` - Not connected, query failed, or the column could not be read as `T`
    pub async fn field<T, I>(&self, sql: &str, values: I) -> Result<Option<T>, AppError>
    where
        T: TryGetable,
        I: IntoIterator<Item = Value>,
    {
        let mut state = self.state.lock().await;
        let connected = state.as_mut().ok_or(LifecycleError::DatabaseNotConnected)?;
        let txn = connected.transaction().await?;

        let row = txn
            .query_one_raw(Statement::from_sql_and_values(DbBackend::Sqlite, sql, values))
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get_by_index::<T>(0)?)),
            None => Ok(None),
        }
    }

    fn database_file(&self) -> PathBuf {
        self.paths.dynamic_dir.join(DATABASE_FILE)
    }
}

#[async_trait]
impl DatabaseHandle for Database {
    /// Opens the database file, creating it and the dynamic directory if
    /// needed, then runs the static build script when one exists.
    async fn connect(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().await;

        if state.is_some() {
            tracing::warn!("Database is already connected");
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.paths.dynamic_dir).await?;

        // The path is passed as a filename, never through a URL, so it may
        // contain characters such as `?` or `#`.
        let options = SqliteConnectOptions::new()
            .filename(self.database_file())
            .create_if_missing(true)
            .disable_statement_logging();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        let build_path = self.paths.static_dir.join(BUILD_SCRIPT);
        match tokio::fs::read_to_string(&build_path).await {
            Ok(script) => {
                conn.execute_unprepared(&script).await?;
                tracing::debug!("Ran database build script {}", build_path.display());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No database build script at {}", build_path.display());
            }
            Err(e) => return Err(e.into()),
        }

        *state = Some(Connected { conn, txn: None });

        tracing::info!("Connected to database in {}", self.paths.dynamic_dir.display());

        Ok(())
    }

    async fn commit(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        let connected = state.as_mut().ok_or(LifecycleError::DatabaseNotConnected)?;

        if let Some(txn) = connected.txn.take() {
            txn.commit().await?;
            tracing::debug!("Committed database transaction");
        }

        Ok(())
    }

    async fn close(&self) -> Result<(), AppError> {
        let connected = self
            .state
            .lock()
            .await
            .take()
            .ok_or(LifecycleError::DatabaseNotConnected)?;

        // Release the connection even if the final commit fails.
        let committed = match connected.txn {
            Some(txn) => txn.commit().await,
            None => Ok(()),
        };

        if let Err(ref e) = committed {
            tracing::error!("Failed to commit pending writes on close: {}", e);
        }

        connected.conn.close().await?;
        committed?;

        tracing::info!("Database closed");

        Ok(())
    }
}
