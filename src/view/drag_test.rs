use crate::view::drag::{DragPayload, MoveIntent, TRANSFER_FORMAT};

#[test]
fn payload_uses_camel_case_keys() {
    let json = DragPayload::new("c1", "l1").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cardId"], "c1");
    assert_eq!(value["sourceListId"], "l1");
}

#[test]
fn drop_on_other_list_produces_intent() {
    let raw = DragPayload::new("c1", "l1").to_json().unwrap();

    let intent = MoveIntent::from_drop(&raw, "l2", None).unwrap();

    assert_eq!(
        intent,
        MoveIntent {
            card_id: "c1".into(),
            source_list_id: "l1".into(),
            target_list_id: "l2".into(),
            position: None,
        }
    );
}

#[test]
fn drop_on_source_list_is_ignored() {
    let raw = DragPayload::new("c1", "l1").to_json().unwrap();
    assert!(MoveIntent::from_drop(&raw, "l1", Some(0)).is_none());
}

#[test]
fn foreign_payloads_are_ignored() {
    assert!(MoveIntent::from_drop("plain text", "l2", None).is_none());
    assert!(MoveIntent::from_drop(r#"{"cardId":"c1"}"#, "l2", None).is_none());
}

#[test]
fn position_is_carried_through() {
    let raw = r#"{"cardId":"c9","sourceListId":"a"}"#;
    let intent = MoveIntent::from_drop(raw, "b", Some(4)).unwrap();
    assert_eq!(intent.position, Some(4));
}

#[test]
fn payload_is_written_under_transfer_format() {
    let mut written = None;
    DragPayload::new("c1", "l1")
        .write_to(|format, json| {
            written = Some((format.to_string(), json.to_string()));
            Ok::<(), ()>(())
        })
        .unwrap();

    let (format, json) = written.unwrap();
    assert_eq!(format, TRANSFER_FORMAT);
    assert_eq!(DragPayload::from_json(&json), Some(DragPayload::new("c1", "l1")));
}

#[test]
fn rejected_transfer_is_reported() {
    let err = DragPayload::new("c1", "l1")
        .write_to(|_, _| Err("NoModificationAllowedError"))
        .unwrap_err();
    assert!(err.contains("NoModificationAllowedError"));
}
