//! Tests for value objects.

use chrono::{TimeZone, Utc};

use crate::domain::*;

#[test]
fn ids_reject_blank_input() {
    assert_eq!(
        BoardId::new("  ").unwrap_err(),
        ValidationError::Required { field: "Board id" }
    );
    assert!(ListId::new("").is_err());
    assert_eq!(CardId::new("abc").unwrap().as_str(), "abc");
}

#[test]
fn generated_ids_are_unique() {
    assert_ne!(BoardId::generate(), BoardId::generate());
}

#[test]
fn titles_are_trimmed() {
    let title = BoardTitle::new("  Roadmap  ").unwrap();
    assert_eq!(title.as_str(), "Roadmap");
}

#[test]
fn titles_reject_empty_after_trim() {
    assert_eq!(
        ListTitle::new("   ").unwrap_err(),
        ValidationError::Required {
            field: "List title"
        }
    );
}

#[test]
fn title_length_limits_count_characters() {
    assert!(BoardTitle::new(&"a".repeat(100)).is_ok());
    assert_eq!(
        BoardTitle::new(&"a".repeat(101)).unwrap_err(),
        ValidationError::TooLong {
            field: "Board title",
            max: 100
        }
    );
    // Multi-byte characters count once each.
    assert!(CardTitle::new(&"é".repeat(200)).is_ok());
    assert!(CardTitle::new(&"é".repeat(201)).is_err());
}

#[test]
fn descriptions_default_to_empty() {
    let description = BoardDescription::new(None).unwrap();
    assert!(description.is_empty());
    assert_eq!(CardDescription::new(Some("  notes ")).unwrap().as_str(), "notes");
}

#[test]
fn description_limit_applies_before_trimming() {
    let padded = format!("{} ", "x".repeat(500));
    assert!(BoardDescription::new(Some(&padded)).is_err());
    assert!(CardDescription::new(Some(&"x".repeat(2000))).is_ok());
    assert!(CardDescription::new(Some(&"x".repeat(2001))).is_err());
}

#[test]
fn positions_reject_negative_values() {
    assert_eq!(ListPosition::new(3).unwrap().value(), 3);
    assert_eq!(
        CardPosition::new(-1).unwrap_err(),
        ValidationError::Negative {
            field: "Card position",
            value: -1
        }
    );
}

#[test]
fn position_previous_is_clamped() {
    assert_eq!(ListPosition::zero().previous(), ListPosition::zero());
    assert_eq!(CardPosition::new(4).unwrap().next().value(), 5);
    assert_eq!(CardPosition::new(4).unwrap().previous().value(), 3);
}

#[test]
fn background_color_defaults_when_missing() {
    assert_eq!(BoardBackgroundColor::new(None).unwrap().as_str(), "#0079bf");
    assert_eq!(BoardBackgroundColor::new(Some("")).unwrap().as_str(), "#0079bf");
    assert_eq!(BoardBackgroundColor::default().as_str(), BoardBackgroundColor::DEFAULT);
}

#[test]
fn background_color_requires_hex_code() {
    assert!(BoardBackgroundColor::new(Some("#A1b2C3")).is_ok());
    for bad in ["0079bf", "#0079b", "#0079bfa", "#zzzzzz", "blue"] {
        assert!(
            matches!(
                BoardBackgroundColor::new(Some(bad)),
                Err(ValidationError::InvalidColor { .. })
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn due_date_parses_supported_formats() {
    let expected = Utc.with_ymd_and_hms(2025, 3, 1, 17, 30, 0).unwrap();

    let rfc = CardDueDate::parse("2025-03-01T17:30:00Z").unwrap();
    assert_eq!(rfc.value(), Some(expected));

    let offset = CardDueDate::parse("2025-03-01T18:30:00+01:00").unwrap();
    assert_eq!(offset.value(), Some(expected));

    let naive = CardDueDate::parse("2025-03-01T17:30:00").unwrap();
    assert_eq!(naive.value(), Some(expected));

    let date = CardDueDate::parse("2025-03-01").unwrap();
    assert_eq!(
        date.value(),
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn due_date_rejects_garbage() {
    assert_eq!(
        CardDueDate::parse("next tuesday").unwrap_err(),
        ValidationError::InvalidDate {
            value: "next tuesday".to_string()
        }
    );
}

#[test]
fn due_date_overdue_check() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let past = CardDueDate::from_datetime(Some(now - chrono::Duration::hours(1)));
    let future = CardDueDate::from_datetime(Some(now + chrono::Duration::hours(1)));

    assert!(past.is_overdue(now));
    assert!(!future.is_overdue(now));
    assert!(!CardDueDate::none().is_overdue(now));
    assert!(!CardDueDate::from_datetime(Some(now)).is_overdue(now));
}

#[test]
fn due_date_display() {
    assert_eq!(CardDueDate::none().to_string(), "");
    assert!(!CardDueDate::none().has_value());
    let due = CardDueDate::parse("2025-03-01T00:00:00Z").unwrap();
    assert_eq!(due.to_string(), "2025-03-01T00:00:00+00:00");
}

#[test]
fn due_date_keeps_microseconds_only() {
    let due = CardDueDate::parse("2025-03-01T17:30:00.123456789Z").unwrap();
    assert_eq!(
        due.value().unwrap().timestamp_subsec_nanos(),
        123_456_000
    );
}
