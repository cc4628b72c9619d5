use sea_query::{ColumnDef, SqliteQueryBuilder, Table};

use crate::constants::{MAX_LANGUAGE_LEN, MAX_URL_LEN};
use crate::schema::AudioFiles;

/// CREATE TABLE IF NOT EXISTS audio_files (
///     language VARCHAR(50) NOT NULL UNIQUE,
///     url VARCHAR(500) NOT NULL
/// )
///
/// The UNIQUE constraint on language is exact-match (as stored); the
/// case-insensitive behavior applies to lookups only.
pub fn create_audio_files_table() -> String {
    Table::create()
        .table(AudioFiles::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(AudioFiles::Language)
                .string_len(MAX_LANGUAGE_LEN as u32)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(AudioFiles::Url)
                .string_len(MAX_URL_LEN as u32)
                .not_null(),
        )
        .to_string(SqliteQueryBuilder)
}
