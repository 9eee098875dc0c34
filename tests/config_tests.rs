// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use snapshare::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.upload_url.is_empty(),
        "No upload endpoint should be configured by default"
    );
    assert_eq!(config.object_name_prefix, "IMG");
    assert!(config.library_dir.is_none());
}

#[test]
fn test_config_json_round_trip() {
    let config = Config {
        upload_url: "https://photos.example.com/upload".to_string(),
        library_dir: Some("/tmp/photos".into()),
        object_name_prefix: "SNAP".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        upload_url: "https://photos.example.com/upload".to_string(),
        library_dir: None,
        object_name_prefix: "SNAP".to_string(),
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_missing_or_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    assert_eq!(Config::load_from(&path), Config::default());

    std::fs::write(&path, "not json").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_resolve_library_dir_prefers_configured_dir() {
    let config = Config {
        library_dir: Some("/tmp/photos".into()),
        ..Config::default()
    };
    assert_eq!(config.resolve_library_dir(), std::path::PathBuf::from("/tmp/photos"));
}
