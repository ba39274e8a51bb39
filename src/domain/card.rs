//! Card entity.

use chrono::{DateTime, Utc};

use super::{
    CardDescription, CardDueDate, CardId, CardPosition, CardTitle, ListId, ValidationError,
};

/// Input for [`Card::create`].
#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub position: i64,
    pub due_date: CardDueDate,
}

/// Partial update for [`Card::update_info`].
///
/// `due_date: Some(CardDueDate::none())` clears the due date, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct CardChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub due_date: Option<CardDueDate>,
}

/// Plain representation used by persistence and transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPrimitives {
    pub id: String,
    pub list_id: String,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A work item inside a list.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    list_id: ListId,
    title: CardTitle,
    description: CardDescription,
    position: CardPosition,
    due_date: CardDueDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Card {
    pub fn create(input: NewCard) -> Result<Self, ValidationError> {
        let now = super::now();
        Ok(Self {
            id: CardId::generate(),
            list_id: ListId::new(input.list_id)?,
            title: CardTitle::new(&input.title)?,
            description: CardDescription::new(input.description.as_deref())?,
            position: CardPosition::new(input.position)?,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct(primitives: CardPrimitives) -> Result<Self, ValidationError> {
        Ok(Self {
            id: CardId::new(primitives.id)?,
            list_id: ListId::new(primitives.list_id)?,
            title: CardTitle::new(&primitives.title)?,
            description: CardDescription::new(Some(&primitives.description))?,
            position: CardPosition::new(primitives.position)?,
            due_date: CardDueDate::from_datetime(primitives.due_date),
            created_at: primitives.created_at,
            updated_at: primitives.updated_at,
        })
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn list_id(&self) -> &ListId {
        &self.list_id
    }

    pub fn title(&self) -> &CardTitle {
        &self.title
    }

    pub fn description(&self) -> &CardDescription {
        &self.description
    }

    pub fn position(&self) -> CardPosition {
        self.position
    }

    pub fn due_date(&self) -> CardDueDate {
        self.due_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_info(&mut self, changes: CardChanges) -> Result<(), ValidationError> {
        let title = changes.title.as_deref().map(CardTitle::new).transpose()?;
        let description = changes
            .description
            .as_deref()
            .map(|d| CardDescription::new(Some(d)))
            .transpose()?;
        let position = changes.position.map(CardPosition::new).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        self.touch();
        Ok(())
    }

    pub fn change_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = CardTitle::new(title)?;
        self.touch();
        Ok(())
    }

    pub fn change_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = CardDescription::new(Some(description))?;
        self.touch();
        Ok(())
    }

    pub fn change_position(&mut self, position: i64) -> Result<(), ValidationError> {
        self.position = CardPosition::new(position)?;
        self.touch();
        Ok(())
    }

    pub fn change_due_date(&mut self, due_date: CardDueDate) {
        self.due_date = due_date;
        self.touch();
    }

    /// Whether the card's due date has passed at `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_overdue(now)
    }

    pub fn to_primitives(&self) -> CardPrimitives {
        CardPrimitives {
            id: self.id.to_string(),
            list_id: self.list_id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            position: self.position.value(),
            due_date: self.due_date.value(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = super::now();
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}
