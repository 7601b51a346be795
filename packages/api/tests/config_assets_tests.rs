//! Application configuration and the preloaded asset bundle

use std::sync::Arc;

use bytes::Bytes;
use certdesk::engine::config::{ConfigurationError, Validator};
use certdesk::{AppConfig, AssetBundle, AssetError, EngineConfig, Toolkit};

#[test]
fn test_bundle_from_entries() {
    let bundle = AssetBundle::from_entries([
        ("index.html", Bytes::from_static(b"<html></html>")),
        ("cert.html", Bytes::from_static(b"cert")),
    ]);

    assert_eq!(bundle.len(), 2);
    assert!(bundle.contains("index.html"));
    assert_eq!(bundle.get("cert.html"), Some(Bytes::from_static(b"cert")));
    assert_eq!(bundle.get("missing.html"), None);
    assert_eq!(bundle.names(), vec!["cert.html", "index.html"]);
}

#[test]
fn test_bundle_from_directory_skips_subdirectories() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), b"<h1>certdesk</h1>").expect("write index");
    std::fs::write(dir.path().join("json.html"), b"json").expect("write json");
    std::fs::create_dir(dir.path().join("nested")).expect("create nested");
    std::fs::write(dir.path().join("nested").join("hidden.html"), b"x").expect("write nested");

    let bundle = AssetBundle::load_dir(dir.path()).expect("directory should load");
    assert_eq!(bundle.names(), vec!["index.html", "json.html"]);
    assert_eq!(
        bundle.get("index.html"),
        Some(Bytes::from_static(b"<h1>certdesk</h1>"))
    );
}

#[test]
fn test_missing_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AssetBundle::load_dir(dir.path().join("absent")).expect_err("no such directory");
    assert!(matches!(err, AssetError::UnreadableDirectory(_)));
}

#[test]
fn test_app_config_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), b"home").expect("write index");

    let config = AppConfig::load(r#"{"json":{"default_indent":4}}"#, dir.path())
        .expect("config should load");
    assert_eq!(config.engine.json.default_indent, 4);
    assert!(config.assets.contains("index.html"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_app_config_load_errors() {
    let dir = tempfile::tempdir().expect("temp dir");

    let err = AppConfig::load(r#"{"json":{"default_indent":0}}"#, dir.path())
        .expect_err("invalid indent");
    assert!(matches!(err, ConfigurationError::InvalidParameter(_)));

    let err = AppConfig::load("{}", dir.path().join("absent")).expect_err("missing assets");
    assert!(matches!(err, ConfigurationError::Unreadable(_)));
}

#[test]
fn test_toolkit_uses_configured_indent() {
    let engine = EngineConfig::from_json_str(r#"{"json":{"default_indent":3}}"#).expect("engine config");
    let toolkit = Toolkit::new(AppConfig::default().with_engine(engine)).expect("valid config");

    let reply = toolkit.dispatch("json/format", r#"{"json":"{\"a\":1}"}"#);
    assert_eq!(reply, r#"{"ok":true,"data":{"formatted":"{\n   \"a\": 1\n}"}}"#);
}

#[test]
fn test_toolkit_uses_configured_domain_limits() {
    let mut engine = EngineConfig::default();
    engine.domain.max_label_length = 4;
    let toolkit = Toolkit::new(AppConfig::default().with_engine(engine)).expect("valid config");

    let reply = toolkit.dispatch("domain/check", r#"{"domain":"abcd.com\nabcde.com"}"#);
    let reply: serde_json::Value = serde_json::from_str(&reply).expect("reply is JSON");
    assert_eq!(reply["data"]["results"][0]["status"], "validDomain");
    assert_eq!(reply["data"]["results"][1]["status"], "invalid");
}

#[test]
fn test_shared_config_serves_assets() {
    let config = Arc::new(
        AppConfig::default().with_assets(AssetBundle::from_entries([("index.html", "home")])),
    );
    let first = Toolkit::from_shared(Arc::clone(&config)).expect("valid config");
    let second = first.clone();

    assert_eq!(first.asset("index.html"), Some(Bytes::from_static(b"home")));
    assert_eq!(second.asset("index.html"), first.asset("index.html"));
    assert_eq!(second.config(), config.as_ref());
    assert_eq!(Arc::strong_count(&config), 3);
}

#[test]
fn test_toolkit_rejects_invalid_config() {
    let mut engine = EngineConfig::default();
    engine.json.default_indent = 0;
    let err = Toolkit::new(AppConfig::default().with_engine(engine)).expect_err("zero indent");
    assert!(matches!(err, ConfigurationError::InvalidParameter(_)));

    let mut engine = EngineConfig::default();
    engine.domain.min_length = 300;
    let shared = Arc::new(AppConfig::default().with_engine(engine));
    let err = Toolkit::from_shared(Arc::clone(&shared)).expect_err("min above max");
    assert!(matches!(err, ConfigurationError::Conflict(_)));
    assert_eq!(Arc::strong_count(&shared), 1);

    assert!(Toolkit::new(AppConfig::default()).is_ok());
}
