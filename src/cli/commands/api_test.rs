// The server itself is covered by the API tests; these check the command's
// database bootstrap and argument plumbing.

use crate::api::Config;
use crate::db::{Database, SqliteDatabase};
use std::net::IpAddr;

#[test]
fn test_config_structure() {
    let config = Config {
        host: "127.0.0.1".parse::<IpAddr>().unwrap(),
        port: 3000,
        verbosity: 0,
        enable_docs: false,
    };

    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert!(!config.enable_docs);
}

#[test]
fn test_ipv6_address_parsing() {
    let ipv6: IpAddr = "::1".parse().unwrap();
    assert!(ipv6.is_ipv6());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_database_in_nested_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/kanban.db");

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();

    assert!(path.exists());
}
