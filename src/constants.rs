/// Maximum length of the `language` field, in characters
pub const MAX_LANGUAGE_LEN: usize = 50;

/// Maximum length of the `url` field, in characters
pub const MAX_URL_LEN: usize = 500;

/// Timeout for the store reachability probe, in seconds
pub const STORE_PING_TIMEOUT_SECS: u64 = 5;

/// Fixed seed dataset: (language, url) pairs inserted by the `seed` command.
/// Entries are processed in order; a duplicate language later in the list is
/// skipped rather than overwriting the earlier entry.
pub const DEFAULT_SEED_DATA: &[(&str, &str)] = &[
    (
        "English",
        "https://raw.githubusercontent.com/Ranjeet95k/Elevenlabsproject/main/English.mp3",
    ),
    (
        "Arabic",
        "https://raw.githubusercontent.com/Ranjeet95k/Elevenlabsproject/main/Arabic.mp3",
    ),
];
