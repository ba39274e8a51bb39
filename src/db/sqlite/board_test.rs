//! Tests for SqliteBoardRepository.

use chrono::{TimeZone, Utc};

use crate::db::{BoardRepository, Database, DbError, ListRepository, SqliteDatabase};
use crate::domain::{Board, BoardChanges, BoardPrimitives, List, NewBoard, NewList};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn board(title: &str) -> Board {
    Board::create(NewBoard {
        title: title.to_string(),
        description: Some("about".to_string()),
        background_color: Some("#112233".to_string()),
    })
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn save_and_find_board() {
    let db = setup_db().await;
    let repo = db.boards();
    let board = board("Roadmap");

    repo.save(&board).await.expect("Save should succeed");

    let found = repo
        .find_by_id(board.id().as_str())
        .await
        .expect("Find should succeed")
        .expect("Board should exist");
    assert_eq!(found.to_primitives(), board.to_primitives());
}

#[tokio::test(flavor = "multi_thread")]
async fn find_missing_board_returns_none() {
    let db = setup_db().await;
    assert!(db.boards().find_by_id("nope").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn save_twice_updates_single_row() {
    let db = setup_db().await;
    let repo = db.boards();
    let mut board = board("Roadmap");
    repo.save(&board).await.unwrap();

    board
        .update_info(BoardChanges {
            title: Some("Roadmap 2".into()),
            ..Default::default()
        })
        .unwrap();
    repo.save(&board).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title().as_str(), "Roadmap 2");
    assert_eq!(all[0].created_at(), board.created_at());
}

#[tokio::test(flavor = "multi_thread")]
async fn find_all_orders_by_creation() {
    let db = setup_db().await;
    let repo = db.boards();
    let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let first = Board::reconstruct(BoardPrimitives {
        created_at: older,
        updated_at: older,
        ..board("First").to_primitives()
    })
    .unwrap();
    let second = board("Second");
    // Saved out of order; ordering comes from created_at.
    repo.save(&second).await.unwrap();
    repo.save(&first).await.unwrap();

    let titles: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|b| b.title().to_string())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_board_and_exists() {
    let db = setup_db().await;
    let repo = db.boards();
    let board = board("Temp");
    repo.save(&board).await.unwrap();
    assert!(repo.exists(board.id().as_str()).await.unwrap());

    repo.delete(board.id().as_str()).await.unwrap();
    assert!(!repo.exists(board.id().as_str()).await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_board_is_not_found() {
    let db = setup_db().await;
    let result = db.boards().delete("missing").await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_board_cascades_to_lists() {
    let db = setup_db().await;
    let board = board("Parent");
    db.boards().save(&board).await.unwrap();
    let list = List::create(NewList {
        board_id: board.id().to_string(),
        title: "Child".into(),
        position: 0,
    })
    .unwrap();
    db.lists().save(&list).await.unwrap();

    db.boards().delete(board.id().as_str()).await.unwrap();

    assert!(!db.lists().exists(list.id().as_str()).await.unwrap());
}
