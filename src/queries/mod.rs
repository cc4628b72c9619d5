//! SQL statement builders, grouped by table.

pub mod audio_files;
pub mod ddl;
