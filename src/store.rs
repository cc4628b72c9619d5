//! Record store operations against the audio_files table.
//!
//! Absence of a record is never an error here: lookups return `Ok(None)` and
//! conditional inserts return `Ok(false)`. A `StoreError` always means the
//! store itself misbehaved (unreachable, timed out, rejected the query).

use sqlx::{Row, SqlitePool};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::constants::STORE_PING_TIMEOUT_SECS;
use crate::model::AudioRecord;
use crate::queries::audio_files;

/// Transport or engine failure talking to the record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
    #[error("record store did not respond within {0:?}")]
    Timeout(Duration),
}

/// Case-insensitive equality lookup on the language field.
/// Unmatched input yields `Ok(None)`.
pub async fn find_by_language_ci(
    pool: &SqlitePool,
    language: &str,
) -> Result<Option<AudioRecord>, StoreError> {
    let sql = audio_files::select_by_language_ci(language);
    let row = sqlx::query(&sql).fetch_optional(pool).await?;

    Ok(row.map(|row| AudioRecord::from_stored(row.get(0), row.get(1))))
}

/// Remove all records. Used only by the seeding operation.
/// Returns the number of rows deleted.
pub async fn clear_all(pool: &SqlitePool) -> Result<u64, StoreError> {
    let sql = audio_files::delete_all();
    let result = sqlx::query(&sql).execute(pool).await?;
    Ok(result.rows_affected())
}

/// Insert a record unless one with the same language (exact match) exists.
/// Returns whether an insertion occurred.
pub async fn insert_if_absent(pool: &SqlitePool, record: &AudioRecord) -> Result<bool, StoreError> {
    let sql = audio_files::exists_exact(record.language());
    let exists = sqlx::query(&sql).fetch_optional(pool).await?.is_some();

    if exists {
        return Ok(false);
    }

    let sql = audio_files::insert(record.language(), record.url());
    sqlx::query(&sql).execute(pool).await?;
    Ok(true)
}

/// Count all records in the store
pub async fn count_all(pool: &SqlitePool) -> Result<i64, StoreError> {
    let sql = audio_files::count_all();
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}

/// Reachability probe with an explicit timeout.
/// Seeding calls this before mutating anything.
pub async fn ping(pool: &SqlitePool) -> Result<(), StoreError> {
    let wait = Duration::from_secs(STORE_PING_TIMEOUT_SECS);
    match timeout(wait, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(result) => {
            result?;
            Ok(())
        }
        Err(_) => Err(StoreError::Timeout(wait)),
    }
}
