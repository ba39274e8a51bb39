//! Drag-and-drop payloads and the move intents derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format key under which the payload sits on the drag transfer.
pub const TRANSFER_FORMAT: &str = "application/json";

/// Data stored on the drag transfer when a card starts being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub card_id: String,
    pub source_list_id: String,
}

impl DragPayload {
    pub fn new(card_id: impl Into<String>, source_list_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            source_list_id: source_list_id.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Hand the payload to `set_data(format, json)`, describing any failure.
    pub fn write_to<E: fmt::Debug>(
        &self,
        set_data: impl FnOnce(&str, &str) -> Result<(), E>,
    ) -> Result<(), String> {
        let json = self.to_json().map_err(|e| e.to_string())?;
        set_data(TRANSFER_FORMAT, &json).map_err(|e| format!("drag data rejected: {e:?}"))
    }

    /// Parse a transfer payload; anything that is not a card payload is ignored.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Request to move a card into another list, independent of the input device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub card_id: String,
    pub source_list_id: String,
    pub target_list_id: String,
    pub position: Option<i64>,
}

impl MoveIntent {
    /// Build an intent from a drop on `target_list_id`.
    ///
    /// Returns `None` for unparseable payloads and for drops on the source list.
    pub fn from_drop(raw_payload: &str, target_list_id: &str, position: Option<i64>) -> Option<Self> {
        let payload = DragPayload::from_json(raw_payload)?;
        if payload.source_list_id == target_list_id {
            return None;
        }
        Some(Self {
            card_id: payload.card_id,
            source_list_id: payload.source_list_id,
            target_list_id: target_list_id.to_string(),
            position,
        })
    }
}
