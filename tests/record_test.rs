//! # Record Validation Tests
//!
//! The AudioRecord constructor is the only way to build a record, so these
//! pin the field invariants down.

use audio_lookup::constants::{MAX_LANGUAGE_LEN, MAX_URL_LEN};
use audio_lookup::model::{AudioRecord, RecordError};

#[test]
fn accepts_a_valid_record() {
    let record = AudioRecord::new("English", "https://example.com/audio/English.mp3").unwrap();
    assert_eq!(record.language(), "English");
    assert_eq!(record.url(), "https://example.com/audio/English.mp3");
}

#[test]
fn rejects_empty_language() {
    let err = AudioRecord::new("", "https://example.com/a.mp3").unwrap_err();
    assert_eq!(err, RecordError::EmptyLanguage);
}

#[test]
fn rejects_empty_url() {
    let err = AudioRecord::new("English", "").unwrap_err();
    assert_eq!(err, RecordError::EmptyUrl);
}

#[test]
fn rejects_overlong_language() {
    let language = "x".repeat(MAX_LANGUAGE_LEN + 1);
    let err = AudioRecord::new(language.clone(), "https://example.com/a.mp3").unwrap_err();
    assert_eq!(err, RecordError::LanguageTooLong(language));
}

#[test]
fn accepts_language_at_the_bound() {
    let language = "x".repeat(MAX_LANGUAGE_LEN);
    assert!(AudioRecord::new(language, "https://example.com/a.mp3").is_ok());
}

#[test]
fn rejects_overlong_url() {
    let url = format!("https://example.com/{}", "x".repeat(MAX_URL_LEN));
    let err = AudioRecord::new("English", url).unwrap_err();
    assert_eq!(err, RecordError::UrlTooLong);
}

#[test]
fn rejects_relative_url() {
    let err = AudioRecord::new("English", "/audio/English.mp3").unwrap_err();
    assert!(matches!(err, RecordError::InvalidUrl(_)));
}
