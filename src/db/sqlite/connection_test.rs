//! Tests for SQLite database connection and migrations.

use crate::db::{BoardRepository, Database, SqliteDatabase};
use crate::domain::{Board, NewBoard};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_all_tables() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    for table in ["_sqlx_migrations", "boards", "cards", "lists"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn foreign_keys_are_enforced() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(enabled, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("kanban.db");

    let board = Board::create(NewBoard {
        title: "Persisted".into(),
        ..Default::default()
    })
    .unwrap();

    {
        let db = SqliteDatabase::open(&path).await.expect("open should succeed");
        db.migrate().await.unwrap();
        db.boards().save(&board).await.unwrap();
        db.pool().close().await;
    }

    let db = SqliteDatabase::open(&path).await.expect("reopen should succeed");
    db.migrate().await.unwrap();
    let found = db.boards().find_by_id(board.id().as_str()).await.unwrap();
    assert_eq!(found.map(|b| b.title().to_string()), Some("Persisted".into()));
}
