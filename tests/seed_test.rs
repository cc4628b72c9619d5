//! # Seeding Tests
//!
//! Pin down the seeding semantics: full reset (clear then insert), per-entry
//! Added/Skipped reporting, the intra-batch duplicate guard, and the
//! no-mutation abort when the store is unreachable.

use audio_lookup::lookup::{self, SeedError, SeedStatus};
use audio_lookup::model::AudioRecord;
use audio_lookup::{db, store};

fn dataset(entries: &[(&str, &str)]) -> Vec<AudioRecord> {
    entries
        .iter()
        .map(|(language, url)| AudioRecord::new(*language, *url).unwrap())
        .collect()
}

async fn create_test_database() -> (sqlx::SqlitePool, tempfile::TempDir) {
    let (pool, guard) = db::create_test_connection_in_temporary_file()
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();
    (pool, guard)
}

#[tokio::test]
async fn test_seed_populates_empty_store() {
    let (pool, _guard) = create_test_database().await;

    let data = dataset(&[
        ("English", "https://example.com/u1.mp3"),
        ("Arabic", "https://example.com/u2.mp3"),
    ]);
    let report = lookup::seed(&pool, &data).await.unwrap();

    assert_eq!(report.outcomes.len(), 2);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == SeedStatus::Added));
    assert_eq!(store::count_all(&pool).await.unwrap(), 2);

    let english = store::find_by_language_ci(&pool, "English")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(english.url(), "https://example.com/u1.mp3");
    let arabic = store::find_by_language_ci(&pool, "Arabic")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(arabic.url(), "https://example.com/u2.mp3");
}

#[tokio::test]
async fn test_seed_replaces_prior_contents() {
    let (pool, _guard) = create_test_database().await;

    // Pre-existing record not in the dataset
    let french = AudioRecord::new("French", "https://example.com/fr.mp3").unwrap();
    store::insert_if_absent(&pool, &french).await.unwrap();

    let data = dataset(&[
        ("English", "https://example.com/u1.mp3"),
        ("Arabic", "https://example.com/u2.mp3"),
    ]);
    lookup::seed(&pool, &data).await.unwrap();

    // Store contains exactly the dataset, regardless of prior contents
    assert_eq!(store::count_all(&pool).await.unwrap(), 2);
    assert!(store::find_by_language_ci(&pool, "French")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_reseed_is_full_reset_all_added() {
    let (pool, _guard) = create_test_database().await;

    let data = dataset(&[
        ("English", "https://example.com/u1.mp3"),
        ("Arabic", "https://example.com/u2.mp3"),
    ]);

    lookup::seed(&pool, &data).await.unwrap();
    let second = lookup::seed(&pool, &data).await.unwrap();

    // The clear runs first, so a re-run re-inserts everything rather than
    // skipping existing records
    assert_eq!(second.added_count(), 2);
    assert_eq!(second.skipped_count(), 0);

    // And never leaves duplicates behind
    assert_eq!(store::count_all(&pool).await.unwrap(), 2);
}

#[tokio::test]
async fn test_seed_skips_intra_batch_duplicates() {
    let (pool, _guard) = create_test_database().await;

    // The existence check can only trigger on duplicates inside the dataset
    let data = dataset(&[
        ("English", "https://example.com/first.mp3"),
        ("English", "https://example.com/second.mp3"),
    ]);
    let report = lookup::seed(&pool, &data).await.unwrap();

    assert_eq!(report.outcomes[0].status, SeedStatus::Added);
    assert_eq!(report.outcomes[1].status, SeedStatus::Skipped);
    assert_eq!(store::count_all(&pool).await.unwrap(), 1);

    let record = store::find_by_language_ci(&pool, "English")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        record.url(),
        "https://example.com/first.mp3",
        "the first entry wins"
    );
}

#[tokio::test]
async fn test_seed_report_preserves_dataset_order() {
    let (pool, _guard) = create_test_database().await;

    let data = dataset(&[
        ("Arabic", "https://example.com/u2.mp3"),
        ("English", "https://example.com/u1.mp3"),
    ]);
    let report = lookup::seed(&pool, &data).await.unwrap();

    let languages: Vec<&str> = report.outcomes.iter().map(|o| o.language.as_str()).collect();
    assert_eq!(languages, vec!["Arabic", "English"]);
}

#[tokio::test]
async fn test_seed_aborts_on_unreachable_store_without_mutation() {
    let (pool, guard) = create_test_database().await;

    let data = dataset(&[("English", "https://example.com/u1.mp3")]);
    lookup::seed(&pool, &data).await.unwrap();

    // Simulate a disconnect, then try to seed a different dataset
    pool.close().await;
    let other = dataset(&[("Arabic", "https://example.com/u2.mp3")]);
    let err = lookup::seed(&pool, &other).await.unwrap_err();
    assert!(matches!(err, SeedError::Aborted(_)));

    // Reopen the same database file: the aborted run must not have cleared it
    let db_path = guard.path().join("test.sqlite");
    let reopened = db::open_pool(&format!("sqlite://{}", db_path.display()))
        .await
        .unwrap();
    assert_eq!(store::count_all(&reopened).await.unwrap(), 1);
    assert!(store::find_by_language_ci(&reopened, "English")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_seed_empty_dataset_clears_store() {
    let (pool, _guard) = create_test_database().await;

    let data = dataset(&[("English", "https://example.com/u1.mp3")]);
    lookup::seed(&pool, &data).await.unwrap();

    let report = lookup::seed(&pool, &[]).await.unwrap();
    assert!(report.outcomes.is_empty());
    assert_eq!(store::count_all(&pool).await.unwrap(), 0);
}
