use sea_query::{Expr, Func, Query, SqliteQueryBuilder};

use crate::schema::AudioFiles;

/// SELECT language, url FROM audio_files WHERE lower(language) = lower(?)
///
/// Case-insensitive equality happens here so callers never normalize input
/// themselves.
pub fn select_by_language_ci(language: &str) -> String {
    Query::select()
        .columns([AudioFiles::Language, AudioFiles::Url])
        .from(AudioFiles::Table)
        .and_where(
            Expr::expr(Func::lower(Expr::col(AudioFiles::Language)))
                .eq(Func::lower(Expr::val(language))),
        )
        .to_string(SqliteQueryBuilder)
}

/// SELECT 1 FROM audio_files WHERE language = ? (exact-match existence check)
pub fn exists_exact(language: &str) -> String {
    Query::select()
        .expr(Expr::val(1))
        .from(AudioFiles::Table)
        .and_where(Expr::col(AudioFiles::Language).eq(language))
        .to_string(SqliteQueryBuilder)
}

/// INSERT INTO audio_files (language, url) VALUES (?, ?)
pub fn insert(language: &str, url: &str) -> String {
    Query::insert()
        .into_table(AudioFiles::Table)
        .columns([AudioFiles::Language, AudioFiles::Url])
        .values_panic([language.into(), url.into()])
        .to_string(SqliteQueryBuilder)
}

/// DELETE FROM audio_files
pub fn delete_all() -> String {
    Query::delete()
        .from_table(AudioFiles::Table)
        .to_string(SqliteQueryBuilder)
}

/// SELECT COUNT(*) FROM audio_files
pub fn count_all() -> String {
    Query::select()
        .expr(Expr::col(AudioFiles::Language).count())
        .from(AudioFiles::Table)
        .to_string(SqliteQueryBuilder)
}
