//! SQLite ListRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{expect_deleted, map_sqlx_error};
use crate::db::utils::{format_timestamp, parse_timestamp};
use crate::db::{DbResult, ListRepository};
use crate::domain::{List, ListPrimitives};

const SELECT_LIST: &str = "SELECT id, board_id, title, position, created_at, updated_at FROM lists";

/// SQLx-backed list repository.
pub struct SqliteListRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_list(row: &SqliteRow) -> DbResult<List> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    let list = List::reconstruct(ListPrimitives {
        id: row.get("id"),
        board_id: row.get("board_id"),
        title: row.get("title"),
        position: row.get("position"),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })?;
    Ok(list)
}

impl<'a> ListRepository for SqliteListRepository<'a> {
    async fn save(&self, list: &List) -> DbResult<()> {
        let p = list.to_primitives();
        sqlx::query(
            "INSERT INTO lists (id, board_id, title, position, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                board_id = excluded.board_id, \
                title = excluded.title, \
                position = excluded.position, \
                updated_at = excluded.updated_at",
        )
        .bind(&p.id)
        .bind(&p.board_id)
        .bind(&p.title)
        .bind(p.position)
        .bind(format_timestamp(p.created_at))
        .bind(format_timestamp(p.updated_at))
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<List>> {
        let row = sqlx::query(&format!("{SELECT_LIST} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        row.as_ref().map(row_to_list).transpose()
    }

    async fn find_all(&self) -> DbResult<Vec<List>> {
        let rows = sqlx::query(&format!("{SELECT_LIST} ORDER BY position ASC, created_at ASC"))
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        rows.iter().map(row_to_list).collect()
    }

    async fn find_by_board_id(&self, board_id: &str) -> DbResult<Vec<List>> {
        let rows = sqlx::query(&format!(
            "{SELECT_LIST} WHERE board_id = ? ORDER BY position ASC, created_at ASC"
        ))
        .bind(board_id)
        .fetch_all(self.pool)
        .await
        .map_err(map_sqlx_error)?;
        rows.iter().map(row_to_list).collect()
    }

    async fn count_by_board_id(&self, board_id: &str) -> DbResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM lists WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        expect_deleted(result, "List", id)
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM lists WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(found != 0)
    }
}
