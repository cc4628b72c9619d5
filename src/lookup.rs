//! Application-facing lookup and seeding operations.
//!
//! Both operations are stateless between calls; all state lives in the record
//! store. Seeding is a one-shot administrative task and must not be run
//! concurrently with itself - two seed runs interleaving on the
//! clear-then-insert sequence race non-deterministically, and the store is
//! shared across process instances so in-process locking would not help.

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::model::AudioRecord;
use crate::store::{self, StoreError};

/// Failure resolving a language to its record
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record matches the requested language. Expected in normal operation.
    #[error("Audio file for language '{language}' not found.")]
    NotFound { language: String },
    /// The store could not be reached. Never collapsed into NotFound.
    #[error("lookup failed: {0}")]
    Unavailable(#[source] StoreError),
}

/// Failure during the seeding operation
#[derive(Debug, Error)]
pub enum SeedError {
    /// The reachability check failed; nothing was mutated. Retry manually.
    #[error("seeding aborted, store unreachable: {0}")]
    Aborted(#[source] StoreError),
    /// The store failed after the initial clear; the dataset may be partially
    /// inserted. Re-running seed recovers (it clears first).
    #[error("seeding failed: {0}")]
    Store(#[from] StoreError),
}

/// Per-entry seeding outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStatus {
    Added,
    Skipped,
}

#[derive(Debug, Serialize)]
pub struct SeedOutcome {
    pub language: String,
    pub status: SeedStatus,
}

/// Report of a completed seeding run, one outcome per dataset entry in order
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn added_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == SeedStatus::Added)
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.added_count()
    }
}

/// Resolve a language name to its audio record.
///
/// The input is passed through untouched; case-insensitivity is the store
/// query's job. A miss carries the requested language back to the caller.
pub async fn resolve(pool: &SqlitePool, language: &str) -> Result<AudioRecord, LookupError> {
    store::find_by_language_ci(pool, language)
        .await
        .map_err(LookupError::Unavailable)?
        .ok_or_else(|| LookupError::NotFound {
            language: language.to_string(),
        })
}

/// Re-establish the seed dataset: verify the store is reachable, clear all
/// existing records, then insert each dataset entry unless a record with that
/// exact language already exists.
///
/// Because the clear runs first, the existence check can only trigger on
/// duplicate languages within `dataset` itself, and re-running seed with the
/// same dataset always reports every entry as Added. This mirrors the
/// original populate procedure; see DESIGN.md for the semantics decision.
pub async fn seed(pool: &SqlitePool, dataset: &[AudioRecord]) -> Result<SeedReport, SeedError> {
    store::ping(pool).await.map_err(SeedError::Aborted)?;

    store::clear_all(pool).await?;

    let mut outcomes = Vec::with_capacity(dataset.len());
    for record in dataset {
        let inserted = store::insert_if_absent(pool, record).await?;
        outcomes.push(SeedOutcome {
            language: record.language().to_string(),
            status: if inserted {
                SeedStatus::Added
            } else {
                SeedStatus::Skipped
            },
        });
    }

    Ok(SeedReport { outcomes })
}
