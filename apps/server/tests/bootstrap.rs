use roster::domain::config::{ApiConfig, SslConfig};
use roster::features::persons::{PersonInput, Persons};
use roster_server::Server;

#[tokio::test]
async fn build_with_defaults_wires_features_and_schema() {
    let server =
        Server::builder().config(ApiConfig::default()).build().await.expect("in-memory build");

    let persons = server.state().try_get_slice::<Persons>().expect("persons slice registered");

    // A write proves the table schema was applied during startup.
    let person = persons
        .service
        .create(PersonInput { name: "Amparo".to_owned(), age: 41, city: "Bogotá".to_owned() })
        .await
        .expect("create through registered slice");

    assert_eq!(person.id.len(), 24);
}

#[tokio::test]
async fn build_rejects_missing_ssl_material() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(SslConfig {
        cert: "/nonexistent/cert.pem".into(),
        key: "/nonexistent/key.pem".into(),
    });

    let err = Server::builder().config(cfg).build().await.expect_err("missing cert must fail");
    assert!(err.to_string().contains("SSL certificate not found"));
}
