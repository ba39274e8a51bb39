//! SQLite CardRepository implementation.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{expect_deleted, map_sqlx_error};
use crate::db::utils::{format_timestamp, parse_timestamp, window_end};
use crate::db::{CardRepository, DbResult};
use crate::domain::{Card, CardPrimitives};

const SELECT_CARD: &str = "SELECT id, list_id, title, description, position, due_date, \
                           created_at, updated_at FROM cards";

/// SQLx-backed card repository.
pub struct SqliteCardRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_card(row: &SqliteRow) -> DbResult<Card> {
    let due_date: Option<String> = row.get("due_date");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    let card = Card::reconstruct(CardPrimitives {
        id: row.get("id"),
        list_id: row.get("list_id"),
        title: row.get("title"),
        description: row.get("description"),
        position: row.get("position"),
        due_date: due_date.as_deref().map(parse_timestamp).transpose()?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })?;
    Ok(card)
}

impl<'a> SqliteCardRepository<'a> {
    async fn fetch(&self, sql: &str, binds: &[String]) -> DbResult<Vec<Card>> {
        let mut query = sqlx::query(sql);
        for value in binds {
            query = query.bind(value);
        }
        let rows = query.fetch_all(self.pool).await.map_err(map_sqlx_error)?;
        rows.iter().map(row_to_card).collect()
    }
}

impl<'a> CardRepository for SqliteCardRepository<'a> {
    async fn save(&self, card: &Card) -> DbResult<()> {
        let p = card.to_primitives();
        sqlx::query(
            "INSERT INTO cards (id, list_id, title, description, position, due_date, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                list_id = excluded.list_id, \
                title = excluded.title, \
                description = excluded.description, \
                position = excluded.position, \
                due_date = excluded.due_date, \
                updated_at = excluded.updated_at",
        )
        .bind(&p.id)
        .bind(&p.list_id)
        .bind(&p.title)
        .bind(&p.description)
        .bind(p.position)
        .bind(p.due_date.map(format_timestamp))
        .bind(format_timestamp(p.created_at))
        .bind(format_timestamp(p.updated_at))
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Card>> {
        let row = sqlx::query(&format!("{SELECT_CARD} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        row.as_ref().map(row_to_card).transpose()
    }

    async fn find_all(&self) -> DbResult<Vec<Card>> {
        self.fetch(
            &format!("{SELECT_CARD} ORDER BY position ASC, created_at ASC"),
            &[],
        )
        .await
    }

    async fn find_by_list_id(&self, list_id: &str) -> DbResult<Vec<Card>> {
        self.fetch(
            &format!("{SELECT_CARD} WHERE list_id = ? ORDER BY position ASC, created_at ASC"),
            &[list_id.to_string()],
        )
        .await
    }

    async fn count_by_list_id(&self, list_id: &str) -> DbResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cards WHERE list_id = ?")
            .bind(list_id)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_overdue_cards(&self, now: DateTime<Utc>) -> DbResult<Vec<Card>> {
        self.fetch(
            &format!(
                "{SELECT_CARD} WHERE due_date IS NOT NULL AND due_date < ? ORDER BY due_date ASC"
            ),
            &[format_timestamp(now)],
        )
        .await
    }

    async fn find_upcoming_cards(&self, now: DateTime<Utc>, days: i64) -> DbResult<Vec<Card>> {
        let until = window_end(now, days);
        self.fetch(
            &format!(
                "{SELECT_CARD} WHERE due_date IS NOT NULL AND due_date >= ? AND due_date <= ? \
                 ORDER BY due_date ASC"
            ),
            &[format_timestamp(now), format_timestamp(until)],
        )
        .await
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        expect_deleted(result, "Card", id)
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cards WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(found != 0)
    }
}
