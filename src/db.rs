use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::queries::ddl;

type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Open a connection pool from a connection string (e.g. sqlite://audio_lookup.sqlite)
///
/// Creates the database file if it doesn't exist. The acquire timeout bounds
/// how long any operation waits for a connection before failing, so an
/// unreachable store surfaces as an error instead of hanging.
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, DynError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Initialize the database schema
/// Safe to call on every startup - the DDL is IF NOT EXISTS
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DynError> {
    sqlx::query(&ddl::create_audio_files_table())
        .execute(pool)
        .await?;
    Ok(())
}

/// Create a database in a temporary file for testing
/// Returns the pool and the TempDir guard that keeps the file alive
pub async fn create_test_connection_in_temporary_file(
) -> Result<(SqlitePool, tempfile::TempDir), DynError> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test.sqlite");
    let url = format!("sqlite://{}", db_path.display());
    let pool = open_pool(&url).await?;
    Ok((pool, dir))
}
