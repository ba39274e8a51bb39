//! Tests for the card entity.

use chrono::{Duration, Utc};

use crate::domain::*;

fn new_card() -> NewCard {
    NewCard {
        list_id: "list-1".into(),
        title: "Write docs".into(),
        ..Default::default()
    }
}

#[test]
fn create_card_without_due_date() {
    let card = Card::create(new_card()).unwrap();
    assert_eq!(card.list_id().as_str(), "list-1");
    assert_eq!(card.position().value(), 0);
    assert!(!card.due_date().has_value());
    assert!(card.description().is_empty());
}

#[test]
fn create_rejects_long_description() {
    let result = Card::create(NewCard {
        description: Some("d".repeat(2001)),
        ..new_card()
    });
    assert_eq!(
        result.unwrap_err(),
        ValidationError::TooLong {
            field: "Card description",
            max: 2000
        }
    );
}

#[test]
fn update_info_can_clear_due_date() {
    let due = CardDueDate::parse("2030-01-01").unwrap();
    let mut card = Card::create(NewCard {
        due_date: due,
        ..new_card()
    })
    .unwrap();
    assert!(card.due_date().has_value());

    card.update_info(CardChanges {
        due_date: Some(CardDueDate::none()),
        ..Default::default()
    })
    .unwrap();
    assert!(!card.due_date().has_value());
}

#[test]
fn update_info_without_due_date_keeps_it() {
    let due = CardDueDate::parse("2030-01-01").unwrap();
    let mut card = Card::create(NewCard {
        due_date: due,
        ..new_card()
    })
    .unwrap();

    card.update_info(CardChanges {
        title: Some("Renamed".into()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(card.title().as_str(), "Renamed");
    assert_eq!(card.due_date(), due);
}

#[test]
fn update_info_validates_before_mutating() {
    let mut card = Card::create(new_card()).unwrap();
    let before = card.to_primitives();
    let result = card.update_info(CardChanges {
        title: Some("New".into()),
        position: Some(-3),
        due_date: Some(CardDueDate::parse("2030-01-01").unwrap()),
        ..Default::default()
    });
    assert!(result.is_err());
    assert_eq!(card.to_primitives(), before);
}

#[test]
fn overdue_follows_due_date() {
    let now = Utc::now();
    let mut card = Card::create(new_card()).unwrap();
    assert!(!card.is_overdue(now));

    card.change_due_date(CardDueDate::from_datetime(Some(now - Duration::days(1))));
    assert!(card.is_overdue(now));
}

#[test]
fn primitives_roundtrip() {
    let card = Card::create(NewCard {
        description: Some("details".into()),
        position: 3,
        due_date: CardDueDate::parse("2030-05-05T10:00:00Z").unwrap(),
        ..new_card()
    })
    .unwrap();
    let restored = Card::reconstruct(card.to_primitives()).unwrap();
    assert_eq!(restored.to_primitives(), card.to_primitives());
    assert_eq!(restored, card);
}
