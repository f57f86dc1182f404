//! SQLite database layer (embedded, no external dependencies)

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tokenvault_core::{Result, TokenRecord, VaultError};

pub struct Database {
    pool: Arc<SqlitePool>,
}

fn storage_error(e: sqlx::Error) -> VaultError {
    tracing::error!("Database error: {}", e);
    VaultError::Storage(e.to_string())
}

impl Database {
    /// Open (or create) the database at `database_path` and make sure the
    /// schema exists. Safe to call on an existing file.
    pub async fn open(database_path: &Path) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path.display());

        if let Some(parent) = database_path.parent() {
            tracing::debug!("Creating parent directory: {}", parent.display());
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                VaultError::Storage(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        tracing::debug!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool).await?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tokens (
                project_name TEXT PRIMARY KEY NOT NULL,
                token_value TEXT NOT NULL,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(storage_error)?;

        if !Self::has_unique_project_key(pool).await? {
            Self::upgrade_legacy_tokens(pool).await?;
        }

        Ok(())
    }

    /// Whether some unique index covers exactly `project_name`.
    async fn has_unique_project_key(pool: &SqlitePool) -> Result<bool> {
        let keys: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT il.name
            FROM pragma_index_list('tokens') AS il
            JOIN pragma_index_info(il.name) AS ii
            WHERE il."unique" = 1
            GROUP BY il.name
            HAVING COUNT(*) = 1 AND MAX(ii.name) = 'project_name'
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(storage_error)?;

        Ok(!keys.is_empty())
    }

    /// Tables written by earlier releases have no key on `project_name`, so
    /// every save appended a row. Keep the newest row per project and add
    /// the unique index the upsert relies on.
    async fn upgrade_legacy_tokens(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Upgrading legacy tokens table: adding unique key on project_name");

        let mut tx = pool.begin().await.map_err(storage_error)?;

        sqlx::query("DELETE FROM tokens WHERE project_name IS NULL OR token_value IS NULL")
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM tokens
            WHERE rowid NOT IN (
                SELECT MAX(rowid) FROM tokens GROUP BY project_name
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?
        .rows_affected();

        sqlx::query(
            r#"
            UPDATE tokens
            SET updated_at = COALESCE(
                strftime('%Y-%m-%dT%H:%M:%S+00:00', updated_at),
                strftime('%Y-%m-%dT%H:%M:%S+00:00', 'now')
            )
            WHERE updated_at IS NULL OR updated_at NOT LIKE '%T%'
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_tokens_project_name ON tokens(project_name)",
        )
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        tracing::info!("Legacy tokens table upgraded, {} stale rows removed", removed);
        Ok(())
    }

    /// Insert or overwrite the token for `project` in one statement.
    pub async fn save_token(&self, project: &str, token: &str) -> Result<()> {
        tracing::debug!("Saving token for project: {}", project);

        sqlx::query(
            r#"
            INSERT INTO tokens (project_name, token_value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(project_name) DO UPDATE SET
                token_value = excluded.token_value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(project)
        .bind(token)
        .bind(Utc::now())
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    pub async fn get_token(&self, project: &str) -> Result<String> {
        self.get_record(project)
            .await
            .map(|record| record.token_value)
    }

    pub async fn get_record(&self, project: &str) -> Result<TokenRecord> {
        tracing::debug!("Fetching token for project: {}", project);

        let row: Option<TokenRow> = sqlx::query_as(
            r#"
            SELECT project_name, token_value, updated_at
            FROM tokens WHERE project_name = ?1
            "#,
        )
        .bind(project)
        .fetch_optional(&*self.pool)
        .await
        .map_err(storage_error)?;

        row.map(TokenRecord::from)
            .ok_or_else(|| VaultError::NotFound(project.to_string()))
    }

    /// All stored tokens, most recently updated first.
    pub async fn list_tokens(&self) -> Result<Vec<TokenRecord>> {
        let rows: Vec<TokenRow> = sqlx::query_as(
            r#"
            SELECT project_name, token_value, updated_at
            FROM tokens
            ORDER BY updated_at DESC, project_name ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(TokenRecord::from).collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    project_name: String,
    token_value: String,
    updated_at: DateTime<Utc>,
}

impl From<TokenRow> for TokenRecord {
    fn from(r: TokenRow) -> Self {
        TokenRecord {
            project_name: r.project_name,
            token_value: r.token_value,
            updated_at: r.updated_at,
        }
    }
}
