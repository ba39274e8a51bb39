//! SQLite BoardRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{expect_deleted, map_sqlx_error};
use crate::db::utils::{format_timestamp, parse_timestamp};
use crate::db::{BoardRepository, DbResult};
use crate::domain::{Board, BoardPrimitives};

const SELECT_BOARD: &str =
    "SELECT id, title, description, background_color, created_at, updated_at FROM boards";

/// SQLx-backed board repository.
pub struct SqliteBoardRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_board(row: &SqliteRow) -> DbResult<Board> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    let board = Board::reconstruct(BoardPrimitives {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        background_color: row.get("background_color"),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })?;
    Ok(board)
}

impl<'a> BoardRepository for SqliteBoardRepository<'a> {
    async fn save(&self, board: &Board) -> DbResult<()> {
        let p = board.to_primitives();
        sqlx::query(
            "INSERT INTO boards (id, title, description, background_color, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                title = excluded.title, \
                description = excluded.description, \
                background_color = excluded.background_color, \
                updated_at = excluded.updated_at",
        )
        .bind(&p.id)
        .bind(&p.title)
        .bind(&p.description)
        .bind(&p.background_color)
        .bind(format_timestamp(p.created_at))
        .bind(format_timestamp(p.updated_at))
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Board>> {
        let row = sqlx::query(&format!("{SELECT_BOARD} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        row.as_ref().map(row_to_board).transpose()
    }

    async fn find_all(&self) -> DbResult<Vec<Board>> {
        let rows = sqlx::query(&format!("{SELECT_BOARD} ORDER BY created_at ASC, id ASC"))
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        rows.iter().map(row_to_board).collect()
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        expect_deleted(result, "Board", id)
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM boards WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(found != 0)
    }
}
