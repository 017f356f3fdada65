use std::fs;

use figment::{providers::{Format, Toml}, Figment};
use qasearch_core::config::{Config, SearchLimits};
use qasearch_core::{Error, SearchRequest, ValidationError};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).expect("load");
    assert_eq!(config.limits().expect("limits"), SearchLimits::default());
}

#[test]
fn file_overrides_individual_limits() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qasearch.toml");
    fs::write(&path, "[search]\nmax_page_size = 20\ndefault_page_size = 10\n").unwrap();

    let limits = Config::load_from(&path).expect("load").limits().expect("limits");
    assert_eq!(limits.max_page_size, 20);
    assert_eq!(limits.default_page_size, 10);
    assert_eq!(limits.max_query_chars, 60, "unset keys keep defaults");

    let err = SearchRequest::new("q").with_page_size(25).validate_with(&limits).unwrap_err();
    assert_eq!(err, ValidationError::PageSizeOutOfRange { size: 25, max: 20 });
    let ok = SearchRequest::new("q").validate_with(&limits).expect("default size");
    assert_eq!(ok.page_size(), 10);
}

#[test]
fn inconsistent_limits_are_rejected() {
    let figment = Figment::new().merge(Toml::string(
        "[search]\nmax_query_chars = 60\nmax_page_size = 10\ndefault_page_size = 30\n",
    ));
    match Config::from_figment(figment) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("default_page_size")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected invalid config"),
    }
}

#[test]
fn limits_cannot_widen_the_ceilings() {
    let figment = Figment::new()
        .merge(Toml::string("[search]\nmax_query_chars = 500\nmax_page_size = 1000\n"));
    match Config::from_figment(figment) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("max_query_chars")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected invalid config"),
    }

    let figment = Figment::new().merge(Toml::string("[search]\nmax_page_size = 51\n"));
    match Config::from_figment(figment) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("max_page_size")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected invalid config"),
    }
}

#[test]
fn hand_built_wide_limits_still_enforce_ceilings() {
    let wide = SearchLimits { max_query_chars: 500, default_page_size: 30, max_page_size: 1000 };
    assert!(matches!(wide.validate(), Err(Error::InvalidConfig(_))));

    let err = SearchRequest::new("x".repeat(200)).validate_with(&wide).unwrap_err();
    assert_eq!(err, ValidationError::QueryTooLong { len: 200, max: 60 });
    let err = SearchRequest::new("x").with_page_size(999).validate_with(&wide).unwrap_err();
    assert_eq!(err, ValidationError::PageSizeOutOfRange { size: 999, max: 50 });
}
