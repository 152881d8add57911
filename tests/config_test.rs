//! Tests for config module

use chilecompra_sync::config::{Config, ConfigFile, ConfigSources};
use chilecompra_sync::constants::{DEFAULT_API_URL, MARKETPLACE_TZ};
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn reference_now() -> DateTime<Tz> {
    MARKETPLACE_TZ
        .with_ymd_and_hms(2024, 6, 15, 14, 30, 0)
        .unwrap()
}

#[test]
fn full_toml_is_parsed() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"
        start = "2024-01-03"
        end = "2024-01-05"
        api_url = "https://staging.example.com/Licitaciones.json"
        data_path = "out/tenders.json"
        meta_path = "out/meta.json"
        "#,
    )
    .unwrap();

    let config = ConfigFile::from_toml_file(tmp.path()).unwrap();
    assert_eq!(config.start, "2024-01-03");
    assert_eq!(config.end, "2024-01-05");
    assert_eq!(
        config.api_url.as_deref(),
        Some("https://staging.example.com/Licitaciones.json")
    );
    assert_eq!(config.data_path, Some(PathBuf::from("out/tenders.json")));
    assert_eq!(config.meta_path, Some(PathBuf::from("out/meta.json")));
}

#[test]
fn minimal_toml_leaves_defaults_unset() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"
        start = "2024-01-03"
        end = "2024-01-05"
        "#,
    )
    .unwrap();

    let config = ConfigFile::from_toml_file(tmp.path()).unwrap();
    assert_eq!(config.api_url, None);
    assert_eq!(config.data_path, None);
    assert_eq!(config.meta_path, None);
}

#[test]
fn missing_required_toml_field_errors() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"
        start = "2024-01-03"
        "#,
    )
    .unwrap();

    assert!(ConfigFile::from_toml_file(tmp.path()).is_err());
}

#[test]
fn unknown_key_errors() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"
        start = "2024-01-03"
        end = "2024-01-05"
        ticket = "credentials-do-not-belong-here"
        "#,
    )
    .unwrap();

    assert!(ConfigFile::from_toml_file(tmp.path()).is_err());
}

#[test]
fn empty_window_date_errors() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"
        start = ""
        end = "2024-01-05"
        "#,
    )
    .unwrap();

    assert!(ConfigFile::from_toml_file(tmp.path()).is_err());
}

#[test]
fn nonexistent_file_errors() {
    assert!(ConfigFile::from_toml_file(std::path::Path::new("nonexistent.toml")).is_err());
}

#[test]
fn file_values_resolve_into_config() {
    let sources = ConfigSources {
        ticket: Some("ticket".to_string()),
        api_url: Some("https://staging.example.com/api".to_string()),
        start: Some("2024-01-03".to_string()),
        end: Some("2024-01-05".to_string()),
        data_path: Some(PathBuf::from("out/tenders.json")),
        meta_path: Some(PathBuf::from("out/meta.json")),
    };

    let config = Config::resolve(sources, reference_now()).unwrap();
    assert_eq!(config.api_url, "https://staging.example.com/api");
    assert_eq!(config.data_path, PathBuf::from("out/tenders.json"));
    assert_eq!(
        config.start_date.date_naive(),
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    );
    assert_eq!(
        config.end_date.date_naive(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
}

#[test]
fn missing_ticket_is_fatal() {
    let sources = ConfigSources {
        start: Some("2024-01-03".to_string()),
        end: Some("2024-01-05".to_string()),
        ..ConfigSources::default()
    };

    assert!(Config::resolve(sources, reference_now()).is_err());
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let sources = ConfigSources {
        ticket: Some("ticket".to_string()),
        api_url: Some("   ".to_string()),
        ..ConfigSources::default()
    };

    let config = Config::resolve(sources, reference_now()).unwrap();
    assert_eq!(config.api_url, DEFAULT_API_URL);
}
