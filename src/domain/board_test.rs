//! Tests for the board entity.

use chrono::{TimeZone, Utc};

use crate::domain::*;

fn new_board(title: &str) -> NewBoard {
    NewBoard {
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn create_applies_defaults() {
    let board = Board::create(new_board("  Sprint  ")).unwrap();

    assert_eq!(board.title().as_str(), "Sprint");
    assert!(board.description().is_empty());
    assert_eq!(board.background_color().as_str(), "#0079bf");
    assert_eq!(board.created_at(), board.updated_at());
    assert!(!board.id().as_str().is_empty());
}

#[test]
fn create_rejects_invalid_color() {
    let err = Board::create(NewBoard {
        title: "Sprint".into(),
        description: None,
        background_color: Some("red".into()),
    })
    .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidColor { .. }));
}

#[test]
fn update_info_is_all_or_nothing() {
    let mut board = Board::create(new_board("Sprint")).unwrap();
    let before = board.to_primitives();

    let result = board.update_info(BoardChanges {
        title: Some("Renamed".into()),
        background_color: Some("#nothex".into()),
        ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(board.to_primitives(), before);
}

#[test]
fn update_info_applies_given_fields_only() {
    let mut board = Board::create(NewBoard {
        title: "Sprint".into(),
        description: Some("first".into()),
        background_color: Some("#111111".into()),
    })
    .unwrap();

    board
        .update_info(BoardChanges {
            title: Some("Sprint 2".into()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(board.title().as_str(), "Sprint 2");
    assert_eq!(board.description().as_str(), "first");
    assert_eq!(board.background_color().as_str(), "#111111");
    assert!(board.updated_at() >= board.created_at());
}

#[test]
fn change_methods_validate() {
    let mut board = Board::create(new_board("Sprint")).unwrap();
    assert!(board.change_title("").is_err());
    board.change_description("updated").unwrap();
    board.change_background_color("#ABCDEF").unwrap();
    assert_eq!(board.description().as_str(), "updated");
    assert_eq!(board.background_color().as_str(), "#ABCDEF");
}

#[test]
fn reconstruct_preserves_fields() {
    let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let primitives = BoardPrimitives {
        id: "board-1".into(),
        title: "Stored".into(),
        description: "desc".into(),
        background_color: "#123456".into(),
        created_at: created,
        updated_at: created,
    };

    let board = Board::reconstruct(primitives.clone()).unwrap();
    assert_eq!(board.to_primitives(), primitives);
}

#[test]
fn reconstruct_rejects_corrupt_data() {
    let now = Utc::now();
    let result = Board::reconstruct(BoardPrimitives {
        id: "board-1".into(),
        title: "".into(),
        description: "".into(),
        background_color: "#123456".into(),
        created_at: now,
        updated_at: now,
    });
    assert!(result.is_err());
}

#[test]
fn equality_is_by_id() {
    let board = Board::create(new_board("Sprint")).unwrap();
    let mut renamed = board.clone();
    renamed.change_title("Other").unwrap();
    assert_eq!(board, renamed);
    assert_ne!(board, Board::create(new_board("Sprint")).unwrap());
}

#[test]
fn timestamps_match_stored_precision() {
    let mut board = Board::create(new_board("Roadmap")).unwrap();
    assert_eq!(board.created_at().timestamp_subsec_nanos() % 1_000, 0);

    board
        .update_info(BoardChanges {
            title: Some("Renamed".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(board.updated_at().timestamp_subsec_nanos() % 1_000, 0);
}
