//! Card use cases, including cross-list moves and due-date queries.

use chrono::Utc;
use tracing::{debug, instrument};

use super::{ServiceError, ServiceResult};
use crate::db::{CardRepository, Database, ListRepository};
use crate::domain::{Card, CardChanges, CardDueDate, NewCard, ValidationError};

/// Window used by [`CardService::get_upcoming_cards`] when none is given.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Input for [`CardService::create`]. A missing position appends the card.
#[derive(Debug, Clone, Default)]
pub struct CreateCard {
    pub list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub due_date: Option<String>,
}

/// Input for [`CardService::update`].
///
/// `due_date` is `None` to keep the current value, `Some(None)` to clear it.
#[derive(Debug, Clone, Default)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub due_date: Option<Option<String>>,
}

fn parse_due_date(value: Option<&str>) -> Result<CardDueDate, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => CardDueDate::parse(value),
        None => Ok(CardDueDate::none()),
    }
}

/// Card operations over any [`Database`].
pub struct CardService<'a, D: Database> {
    db: &'a D,
}

impl<'a, D: Database> CardService<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, input: CreateCard) -> ServiceResult<Card> {
        if !self.db.lists().exists(&input.list_id).await? {
            return Err(ServiceError::reference_not_found("List", input.list_id));
        }

        let position = match input.position {
            Some(position) => position,
            None => self.db.cards().count_by_list_id(&input.list_id).await?,
        };
        let due_date = parse_due_date(input.due_date.as_deref())?;

        let card = Card::create(NewCard {
            list_id: input.list_id,
            title: input.title,
            description: input.description,
            position,
            due_date,
        })?;
        self.db.cards().save(&card).await?;
        debug!(id = %card.id(), position, "Card created");
        Ok(card)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ServiceResult<Card> {
        self.db
            .cards()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Card", id))
    }

    /// All cards, or only those of `list_id`, ordered by position.
    #[instrument(skip(self))]
    pub async fn list(&self, list_id: Option<&str>) -> ServiceResult<Vec<Card>> {
        let cards = match list_id {
            Some(list_id) => self.db.cards().find_by_list_id(list_id).await?,
            None => self.db.cards().find_all().await?,
        };
        Ok(cards)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, input: UpdateCard) -> ServiceResult<Card> {
        let mut card = self.get(id).await?;
        let due_date = input
            .due_date
            .map(|due| parse_due_date(due.as_deref()))
            .transpose()?;
        card.update_info(CardChanges {
            title: input.title,
            description: input.description,
            position: input.position,
            due_date,
        })?;
        self.db.cards().save(&card).await?;
        Ok(card)
    }

    /// Move a card to `position` in `list_id`.
    ///
    /// Within the same list only the position changes. Moving to another
    /// list recreates the card there under a new id, keeping title,
    /// description and due date, and only then deletes the original.
    #[instrument(skip(self))]
    pub async fn move_card(&self, id: &str, list_id: &str, position: i64) -> ServiceResult<Card> {
        let mut card = self.get(id).await?;
        if !self.db.lists().exists(list_id).await? {
            return Err(ServiceError::reference_not_found("List", list_id));
        }

        if card.list_id().as_str() == list_id {
            card.change_position(position)?;
            self.db.cards().save(&card).await?;
            return Ok(card);
        }

        let moved = Card::create(NewCard {
            list_id: list_id.to_string(),
            title: card.title().to_string(),
            description: Some(card.description().to_string()),
            position,
            due_date: card.due_date(),
        })?;
        self.db.cards().save(&moved).await?;
        self.db.cards().delete(id).await?;
        debug!(old_id = id, new_id = %moved.id(), list_id, "Card moved across lists");
        Ok(moved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        if !self.exists(id).await? {
            return Err(ServiceError::not_found("Card", id));
        }
        self.db.cards().delete(id).await?;
        Ok(())
    }

    pub async fn exists(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.db.cards().exists(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_overdue_cards(&self) -> ServiceResult<Vec<Card>> {
        Ok(self.db.cards().find_overdue_cards(Utc::now()).await?)
    }

    /// Cards due within the next `days` (default 7).
    #[instrument(skip(self))]
    pub async fn get_upcoming_cards(&self, days: Option<i64>) -> ServiceResult<Vec<Card>> {
        let days = days.unwrap_or(DEFAULT_UPCOMING_DAYS);
        if days < 0 {
            return Err(ValidationError::Negative {
                field: "days",
                value: days,
            }
            .into());
        }
        Ok(self.db.cards().find_upcoming_cards(Utc::now(), days).await?)
    }
}
