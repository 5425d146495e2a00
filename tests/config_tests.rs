use std::fs;

use area51::error::{ConfigError, Error};
use area51::infrastructure::config::settings::Config;
use rust_decimal_macros::dec;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

#[test]
fn minimal_config_uses_defaults() {
    let config = Config::parse_toml(&format!("[auth]\ntoken_secret = \"{SECRET}\"\n")).unwrap();

    assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.database.path, "area51.db");
    assert_eq!(config.auth.session_ttl_hours, 24);
    assert_eq!(config.storage.public_base_url, "/media");
    assert_eq!(config.checkout.free_delivery_threshold, dec!(30));
    assert_eq!(config.checkout.delivery_fee, dec!(5.99));
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn full_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area51.toml");
    fs::write(
        &path,
        format!(
            r#"
[server]
host = "0.0.0.0"
port = 3000
cors_origins = ["https://shop.example"]

[database]
path = "/var/lib/area51/area51.db"
pool_size = 4

[auth]
token_secret = "{SECRET}"
session_ttl_hours = 12
bcrypt_cost = 12

[storage]
media_root = "/var/lib/area51/media"
public_base_url = "https://cdn.example/media"
max_upload_mb = 10

[checkout]
free_delivery_threshold = "50"
delivery_fee = "3.50"
tax_rate = "0.0825"

[logging]
level = "debug"
format = "json"
"#
        ),
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.server.cors_origins, vec!["https://shop.example"]);
    assert_eq!(config.auth.bcrypt_cost, 12);
    assert_eq!(config.storage.max_upload_mb, 10);

    let policy = config.checkout.policy();
    assert_eq!(policy.free_delivery_threshold, dec!(50));
    assert_eq!(policy.delivery_fee, dec!(3.50));
    assert_eq!(policy.tax_rate, dec!(0.0825));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    match Config::load(dir.path().join("absent.toml")) {
        Err(Error::Config(ConfigError::ReadFile(_))) => {}
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn short_secret_is_rejected() {
    match Config::parse_toml("[auth]\ntoken_secret = \"short\"\n") {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "auth.token_secret",
            ..
        })) => {}
        other => panic!("expected invalid secret, got {other:?}"),
    }
}

#[test]
fn tax_rate_above_one_is_rejected() {
    let toml = format!("[auth]\ntoken_secret = \"{SECRET}\"\n\n[checkout]\ntax_rate = \"8.25\"\n");
    match Config::parse_toml(&toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "checkout.tax_rate",
            ..
        })) => {}
        other => panic!("expected invalid tax rate, got {other:?}"),
    }
}

#[test]
fn unknown_log_format_is_rejected() {
    let toml = format!("[auth]\ntoken_secret = \"{SECRET}\"\n\n[logging]\nformat = \"xml\"\n");
    assert!(Config::parse_toml(&toml).is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    match Config::parse_toml("[server\nport = ") {
        Err(Error::Config(ConfigError::Parse(_))) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}
