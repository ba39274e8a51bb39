//! List use cases.

use tracing::{debug, instrument};

use super::{ServiceError, ServiceResult};
use crate::db::{BoardRepository, Database, ListRepository};
use crate::domain::{List, ListChanges, NewList};

/// Input for [`ListService::create`]. A missing position appends the list.
#[derive(Debug, Clone, Default)]
pub struct CreateList {
    pub board_id: String,
    pub title: String,
    pub position: Option<i64>,
}

/// List operations over any [`Database`].
pub struct ListService<'a, D: Database> {
    db: &'a D,
}

impl<'a, D: Database> ListService<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, input: CreateList) -> ServiceResult<List> {
        if !self.db.boards().exists(&input.board_id).await? {
            return Err(ServiceError::reference_not_found("Board", input.board_id));
        }

        let position = match input.position {
            Some(position) => position,
            None => self.db.lists().count_by_board_id(&input.board_id).await?,
        };

        let list = List::create(NewList {
            board_id: input.board_id,
            title: input.title,
            position,
        })?;
        self.db.lists().save(&list).await?;
        debug!(id = %list.id(), position, "List created");
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ServiceResult<List> {
        self.db
            .lists()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("List", id))
    }

    /// All lists, or only those of `board_id`, ordered by position.
    #[instrument(skip(self))]
    pub async fn list(&self, board_id: Option<&str>) -> ServiceResult<Vec<List>> {
        let lists = match board_id {
            Some(board_id) => self.db.lists().find_by_board_id(board_id).await?,
            None => self.db.lists().find_all().await?,
        };
        Ok(lists)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, changes: ListChanges) -> ServiceResult<List> {
        let mut list = self.get(id).await?;
        list.update_info(changes)?;
        self.db.lists().save(&list).await?;
        Ok(list)
    }

    /// Overwrite the list's position. Sibling positions are left alone.
    #[instrument(skip(self))]
    pub async fn move_list(&self, id: &str, position: i64) -> ServiceResult<List> {
        let mut list = self.get(id).await?;
        list.change_position(position)?;
        self.db.lists().save(&list).await?;
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        if !self.exists(id).await? {
            return Err(ServiceError::not_found("List", id));
        }
        self.db.lists().delete(id).await?;
        Ok(())
    }

    pub async fn exists(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.db.lists().exists(id).await?)
    }
}
