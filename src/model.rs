use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_LANGUAGE_LEN, MAX_URL_LEN};

/// Validation failure when constructing an [`AudioRecord`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("language must not be empty")]
    EmptyLanguage,
    #[error("language '{0}' exceeds {MAX_LANGUAGE_LEN} characters")]
    LanguageTooLong(String),
    #[error("url must not be empty")]
    EmptyUrl,
    #[error("url exceeds {MAX_URL_LEN} characters")]
    UrlTooLong,
    #[error("url '{0}' is not a valid absolute URL")]
    InvalidUrl(String),
}

/// A single language-to-audio-URL record.
///
/// Fields are private so a record can only be built through the validated
/// constructor; records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRecord {
    language: String,
    url: String,
}

impl AudioRecord {
    /// Build a record, enforcing the field invariants: non-empty language and
    /// url, length bounds, and a fully-qualified url.
    pub fn new(language: impl Into<String>, url: impl Into<String>) -> Result<Self, RecordError> {
        let language = language.into();
        let url = url.into();

        if language.is_empty() {
            return Err(RecordError::EmptyLanguage);
        }
        if language.chars().count() > MAX_LANGUAGE_LEN {
            return Err(RecordError::LanguageTooLong(language));
        }
        if url.is_empty() {
            return Err(RecordError::EmptyUrl);
        }
        if url.chars().count() > MAX_URL_LEN {
            return Err(RecordError::UrlTooLong);
        }
        if url::Url::parse(&url).is_err() {
            return Err(RecordError::InvalidUrl(url));
        }

        Ok(Self { language, url })
    }

    /// Rebuild a record from a stored row. Rows coming back from the store
    /// already passed validation on the way in, so none is repeated here.
    pub(crate) fn from_stored(language: String, url: String) -> Self {
        Self { language, url }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
