//! Board use cases.

use tracing::{debug, instrument};

use super::{ServiceError, ServiceResult};
use crate::db::{BoardRepository, Database};
use crate::domain::{Board, BoardChanges, NewBoard};

/// Board operations over any [`Database`].
pub struct BoardService<'a, D: Database> {
    db: &'a D,
}

impl<'a, D: Database> BoardService<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, input: NewBoard) -> ServiceResult<Board> {
        let board = Board::create(input)?;
        self.db.boards().save(&board).await?;
        debug!(id = %board.id(), "Board created");
        Ok(board)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ServiceResult<Board> {
        self.db
            .boards()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Board", id))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Board>> {
        Ok(self.db.boards().find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, changes: BoardChanges) -> ServiceResult<Board> {
        let mut board = self.get(id).await?;
        board.update_info(changes)?;
        self.db.boards().save(&board).await?;
        Ok(board)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        if !self.exists(id).await? {
            return Err(ServiceError::not_found("Board", id));
        }
        self.db.boards().delete(id).await?;
        debug!(id, "Board deleted");
        Ok(())
    }

    pub async fn exists(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.db.boards().exists(id).await?)
    }
}
