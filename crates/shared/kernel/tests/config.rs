use petreg_kernel::config::{ConfigError, load_config};
use petreg_kernel::domain::config::ApiConfig;
use std::fs;

#[test]
fn loads_file_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("server.toml"),
        r#"
[server]
address = "127.0.0.1"
port = 3100

[database]
url = "sqlite::memory:"

[storage]
static_dir = "assets"

[logging]
level = "debug"
console = false
path = "logs"
"#,
    )
    .unwrap();

    let cfg: ApiConfig = load_config(Some(dir.path().join("server"))).unwrap();

    assert_eq!(cfg.server.port, 3100);
    assert_eq!(cfg.server.address.to_string(), "127.0.0.1");
    assert_eq!(cfg.database.url, "sqlite::memory:");
    assert_eq!(cfg.database.max_connections, 10);
    assert_eq!(cfg.storage.static_dir.to_str(), Some("assets"));
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.console);
}

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.json");
    fs::write(&path, r#"{ "server": { "port": 3200 } }"#).unwrap();

    let cfg: ApiConfig = load_config(Some(&path)).unwrap();

    assert_eq!(cfg.server.port, 3200);
    assert_eq!(cfg.database.url, "sqlite://petreg.db?mode=rwc");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_config::<ApiConfig>(Some(dir.path().join("absent"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}

#[test]
fn mistyped_values_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not-a-port\"\n").unwrap();

    let err = load_config::<ApiConfig>(Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("Config error (Failed to deserialize config)"));
}
