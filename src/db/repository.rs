//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Methods return `Send` futures so handlers can await them inside axum.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::db::DbResult;
use crate::domain::{Board, Card, List};

/// Repository for Board operations.
pub trait BoardRepository: Send + Sync {
    /// Insert or replace a board.
    fn save(&self, board: &Board) -> impl Future<Output = DbResult<()>> + Send;

    /// Get a board by ID, `None` when absent.
    fn find_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<Board>>> + Send;

    /// Get all boards, oldest first.
    fn find_all(&self) -> impl Future<Output = DbResult<Vec<Board>>> + Send;

    /// Delete a board by ID. Its lists and cards go with it.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Whether a board with this ID exists.
    fn exists(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for List operations.
pub trait ListRepository: Send + Sync {
    /// Insert or replace a list.
    fn save(&self, list: &List) -> impl Future<Output = DbResult<()>> + Send;

    /// Get a list by ID, `None` when absent.
    fn find_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<List>>> + Send;

    /// Get all lists ordered by position.
    fn find_all(&self) -> impl Future<Output = DbResult<Vec<List>>> + Send;

    /// Get the lists of one board ordered by position.
    fn find_by_board_id(&self, board_id: &str)
    -> impl Future<Output = DbResult<Vec<List>>> + Send;

    /// Number of lists in a board.
    fn count_by_board_id(&self, board_id: &str) -> impl Future<Output = DbResult<i64>> + Send;

    /// Delete a list by ID. Its cards go with it.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Whether a list with this ID exists.
    fn exists(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for Card operations.
pub trait CardRepository: Send + Sync {
    /// Insert or replace a card.
    fn save(&self, card: &Card) -> impl Future<Output = DbResult<()>> + Send;

    /// Get a card by ID, `None` when absent.
    fn find_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<Card>>> + Send;

    /// Get all cards ordered by position.
    fn find_all(&self) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Get the cards of one list ordered by position.
    fn find_by_list_id(&self, list_id: &str) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Number of cards in a list.
    fn count_by_list_id(&self, list_id: &str) -> impl Future<Output = DbResult<i64>> + Send;

    /// Cards due strictly before `now`, earliest first.
    fn find_overdue_cards(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Cards due in `[now, now + days]`, earliest first.
    fn find_upcoming_cards(
        &self,
        now: DateTime<Utc>,
        days: i64,
    ) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Delete a card by ID.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Whether a card with this ID exists.
    fn exists(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Database abstraction providing access to all repositories.
///
/// Implementations hand out repositories as associated types so callers
/// never pay for dynamic dispatch.
pub trait Database: Send + Sync + 'static {
    type Boards<'a>: BoardRepository
    where
        Self: 'a;
    type Lists<'a>: ListRepository
    where
        Self: 'a;
    type Cards<'a>: CardRepository
    where
        Self: 'a;

    /// Run pending schema migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    fn boards(&self) -> Self::Boards<'_>;
    fn lists(&self) -> Self::Lists<'_>;
    fn cards(&self) -> Self::Cards<'_>;
}
