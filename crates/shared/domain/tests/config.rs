use roster_domain::config::{ApiConfig, DatabaseConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4680);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "roster");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "mem://", "namespace": "n", "database": "d", "credentials": null }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.namespace, "n");
    assert!(cfg.database.credentials.is_none());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let raw = json!({});

    let cfg: ApiConfig = serde_json::from_value(raw).expect("empty config deserialize");
    assert_eq!(cfg.server.port, 4680);
    assert_eq!(cfg.database.url, "mem://");
}
