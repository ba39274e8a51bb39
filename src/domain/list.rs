//! List entity.

use chrono::{DateTime, Utc};

use super::{BoardId, ListId, ListPosition, ListTitle, ValidationError};

/// Input for [`List::create`]. The position is already resolved by the caller.
#[derive(Debug, Clone, Default)]
pub struct NewList {
    pub board_id: String,
    pub title: String,
    pub position: i64,
}

/// Partial update for [`List::update_info`].
#[derive(Debug, Clone, Default)]
pub struct ListChanges {
    pub title: Option<String>,
    pub position: Option<i64>,
}

/// Plain representation used by persistence and transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPrimitives {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered column of cards inside a board.
#[derive(Debug, Clone)]
pub struct List {
    id: ListId,
    board_id: BoardId,
    title: ListTitle,
    position: ListPosition,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl List {
    pub fn create(input: NewList) -> Result<Self, ValidationError> {
        let now = super::now();
        Ok(Self {
            id: ListId::generate(),
            board_id: BoardId::new(input.board_id)?,
            title: ListTitle::new(&input.title)?,
            position: ListPosition::new(input.position)?,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct(primitives: ListPrimitives) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ListId::new(primitives.id)?,
            board_id: BoardId::new(primitives.board_id)?,
            title: ListTitle::new(&primitives.title)?,
            position: ListPosition::new(primitives.position)?,
            created_at: primitives.created_at,
            updated_at: primitives.updated_at,
        })
    }

    pub fn id(&self) -> &ListId {
        &self.id
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    pub fn title(&self) -> &ListTitle {
        &self.title
    }

    pub fn position(&self) -> ListPosition {
        self.position
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_info(&mut self, changes: ListChanges) -> Result<(), ValidationError> {
        let title = changes.title.as_deref().map(ListTitle::new).transpose()?;
        let position = changes.position.map(ListPosition::new).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(position) = position {
            self.position = position;
        }
        self.touch();
        Ok(())
    }

    pub fn change_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = ListTitle::new(title)?;
        self.touch();
        Ok(())
    }

    pub fn change_position(&mut self, position: i64) -> Result<(), ValidationError> {
        self.position = ListPosition::new(position)?;
        self.touch();
        Ok(())
    }

    pub fn to_primitives(&self) -> ListPrimitives {
        ListPrimitives {
            id: self.id.to_string(),
            board_id: self.board_id.to_string(),
            title: self.title.to_string(),
            position: self.position.value(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = super::now();
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for List {}
