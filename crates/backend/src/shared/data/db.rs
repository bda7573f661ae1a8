use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::path::Path;

use crate::shared::error::AppError;

/// Schema of the sales table. Never altered once created.
const CREATE_SALES_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product TEXT,
        quantity INTEGER,
        unit_price REAL,
        date TEXT,
        latitude REAL,
        longitude REAL
    );
"#;

/// Handle to the sales database for the duration of one request.
///
/// Open it at the start of a request and hand it back through
/// [`SalesStore::release`] at the end. Dropping it on an early return
/// also releases the connection.
pub struct SalesStore {
    conn: DatabaseConnection,
}

impl SalesStore {
    /// Open (creating if needed) the database file and ensure the schema
    pub async fn open(db_file: &Path) -> Result<Self, AppError> {
        if let Some(parent) = db_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let absolute_path = if db_file.is_absolute() {
            db_file.to_path_buf()
        } else {
            std::env::current_dir()?.join(db_file)
        };
        // Normalize path separators and ensure proper URL form on Windows
        let normalized = absolute_path.to_string_lossy().replace('\\', "/");
        let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
        let prefix = if needs_leading_slash { "/" } else { "" };
        let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
        Ok(Self::connect(&db_url).await?)
    }

    /// Connect to any sqlite URL (e.g. `sqlite::memory:`) and ensure the schema
    pub async fn connect(db_url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(db_url.to_owned());
        // One connection per handle: an in-memory database lives in its connection
        options.max_connections(1).sqlx_logging(false);
        let conn = Database::connect(options).await?;
        ensure_schema(&conn).await?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the connection and pass `result` through.
    /// A failure to close is logged, never allowed to mask the result.
    pub async fn release<T>(self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(e) = self.conn.close().await {
            tracing::warn!("Failed to close sales store: {}", e);
        }
        result
    }
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_SALES_TABLE_SQL.to_string(),
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::FromQueryResult;

    #[derive(Debug, FromQueryResult)]
    struct TableName {
        name: String,
    }

    async fn sales_tables(conn: &DatabaseConnection) -> Vec<String> {
        let stmt = Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name='sales';".to_string(),
        );
        TableName::find_by_statement(stmt)
            .all(conn)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect()
    }

    #[tokio::test]
    async fn test_connect_creates_table() {
        let store = SalesStore::connect("sqlite::memory:").await.unwrap();
        assert_eq!(sales_tables(store.connection()).await, vec!["sales"]);
        store.release(Ok(())).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = SalesStore::connect("sqlite::memory:").await.unwrap();
        ensure_schema(store.connection()).await.unwrap();
        ensure_schema(store.connection()).await.unwrap();
        assert_eq!(sales_tables(store.connection()).await.len(), 1);
    }

    #[tokio::test]
    async fn test_open_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("db").join("sales.db");
        let store = SalesStore::open(&path).await.unwrap();
        store.release(Ok(())).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_release_passes_error_through() {
        let store = SalesStore::connect("sqlite::memory:").await.unwrap();
        let res: Result<(), AppError> = store
            .release(Err(AppError::Validation("bad".into())))
            .await;
        assert!(matches!(res, Err(AppError::Validation(_))));
    }
}
