//! Tests for SqliteListRepository.

use crate::db::{BoardRepository, Database, DbError, ListRepository, SqliteDatabase};
use crate::domain::{Board, List, NewBoard, NewList};

async fn setup_with_board() -> (SqliteDatabase, Board) {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let board = Board::create(NewBoard {
        title: "Board".into(),
        ..Default::default()
    })
    .unwrap();
    db.boards().save(&board).await.unwrap();
    (db, board)
}

fn list(board: &Board, title: &str, position: i64) -> List {
    List::create(NewList {
        board_id: board.id().to_string(),
        title: title.to_string(),
        position,
    })
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn find_by_board_orders_by_position() {
    let (db, board) = setup_with_board().await;
    let repo = db.lists();
    repo.save(&list(&board, "Done", 2)).await.unwrap();
    repo.save(&list(&board, "Todo", 0)).await.unwrap();
    repo.save(&list(&board, "Doing", 1)).await.unwrap();

    let titles: Vec<String> = repo
        .find_by_board_id(board.id().as_str())
        .await
        .unwrap()
        .iter()
        .map(|l| l.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Todo", "Doing", "Done"]);
    assert_eq!(repo.count_by_board_id(board.id().as_str()).await.unwrap(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn count_for_unknown_board_is_zero() {
    let (db, _) = setup_with_board().await;
    assert_eq!(db.lists().count_by_board_id("other").await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_positions_are_allowed() {
    let (db, board) = setup_with_board().await;
    let repo = db.lists();
    repo.save(&list(&board, "A", 0)).await.unwrap();
    repo.save(&list(&board, "B", 0)).await.unwrap();

    let lists = repo.find_by_board_id(board.id().as_str()).await.unwrap();
    assert_eq!(lists.len(), 2);
    assert!(lists.iter().all(|l| l.position().value() == 0));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_with_unknown_board_violates_constraint() {
    let (db, _) = setup_with_board().await;
    let orphan = List::create(NewList {
        board_id: "ghost".into(),
        title: "Orphan".into(),
        position: 0,
    })
    .unwrap();

    let result = db.lists().save(&orphan).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_position_in_place() {
    let (db, board) = setup_with_board().await;
    let repo = db.lists();
    let mut todo = list(&board, "Todo", 0);
    repo.save(&todo).await.unwrap();

    todo.change_position(5).unwrap();
    repo.save(&todo).await.unwrap();

    let found = repo.find_by_id(todo.id().as_str()).await.unwrap().unwrap();
    assert_eq!(found.position().value(), 5);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_list() {
    let (db, board) = setup_with_board().await;
    let repo = db.lists();
    let todo = list(&board, "Todo", 0);
    repo.save(&todo).await.unwrap();

    repo.delete(todo.id().as_str()).await.unwrap();
    assert!(repo.find_by_id(todo.id().as_str()).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(todo.id().as_str()).await,
        Err(DbError::NotFound { .. })
    ));
}
