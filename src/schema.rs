use sea_query::Iden;

/// Audio files table - one row per language
#[derive(Iden)]
pub enum AudioFiles {
    Table,
    Language,
    Url,
}
