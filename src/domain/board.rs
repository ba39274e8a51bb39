//! Board entity.

use chrono::{DateTime, Utc};

use super::{BoardBackgroundColor, BoardDescription, BoardId, BoardTitle, ValidationError};

/// Input for [`Board::create`].
#[derive(Debug, Clone, Default)]
pub struct NewBoard {
    pub title: String,
    pub description: Option<String>,
    pub background_color: Option<String>,
}

/// Partial update for [`Board::update_info`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct BoardChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
}

/// Plain representation used by persistence and transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPrimitives {
    pub id: String,
    pub title: String,
    pub description: String,
    pub background_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Top-level container of lists.
#[derive(Debug, Clone)]
pub struct Board {
    id: BoardId,
    title: BoardTitle,
    description: BoardDescription,
    background_color: BoardBackgroundColor,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Board {
    /// Build a new board with a generated id and fresh timestamps.
    pub fn create(input: NewBoard) -> Result<Self, ValidationError> {
        let now = super::now();
        Ok(Self {
            id: BoardId::generate(),
            title: BoardTitle::new(&input.title)?,
            description: BoardDescription::new(input.description.as_deref())?,
            background_color: BoardBackgroundColor::new(input.background_color.as_deref())?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a board from stored fields.
    pub fn reconstruct(primitives: BoardPrimitives) -> Result<Self, ValidationError> {
        Ok(Self {
            id: BoardId::new(primitives.id)?,
            title: BoardTitle::new(&primitives.title)?,
            description: BoardDescription::new(Some(&primitives.description))?,
            background_color: BoardBackgroundColor::new(Some(&primitives.background_color))?,
            created_at: primitives.created_at,
            updated_at: primitives.updated_at,
        })
    }

    pub fn id(&self) -> &BoardId {
        &self.id
    }

    pub fn title(&self) -> &BoardTitle {
        &self.title
    }

    pub fn description(&self) -> &BoardDescription {
        &self.description
    }

    pub fn background_color(&self) -> &BoardBackgroundColor {
        &self.background_color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply the provided fields. All of them are validated before anything
    /// changes; `updated_at` is refreshed even when `changes` is empty.
    pub fn update_info(&mut self, changes: BoardChanges) -> Result<(), ValidationError> {
        let title = changes.title.as_deref().map(BoardTitle::new).transpose()?;
        let description = changes
            .description
            .as_deref()
            .map(|d| BoardDescription::new(Some(d)))
            .transpose()?;
        let background_color = changes
            .background_color
            .as_deref()
            .map(|c| BoardBackgroundColor::new(Some(c)))
            .transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(background_color) = background_color {
            self.background_color = background_color;
        }
        self.touch();
        Ok(())
    }

    pub fn change_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = BoardTitle::new(title)?;
        self.touch();
        Ok(())
    }

    pub fn change_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = BoardDescription::new(Some(description))?;
        self.touch();
        Ok(())
    }

    pub fn change_background_color(&mut self, color: &str) -> Result<(), ValidationError> {
        self.background_color = BoardBackgroundColor::new(Some(color))?;
        self.touch();
        Ok(())
    }

    pub fn to_primitives(&self) -> BoardPrimitives {
        BoardPrimitives {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            background_color: self.background_color.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = super::now();
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Board {}
