// src/infrastructure/repositories/postgres_frame.rs
use super::{count_to_u64, map_sqlx};
use crate::domain::catalog::{Amount, Frame, FrameId, FrameRepository, NewFrame};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, style, price, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFrameRepository {
    pool: PgPool,
}

impl PostgresFrameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FrameRow {
    id: i64,
    style: String,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FrameRow> for Frame {
    type Error = DomainError;

    fn try_from(row: FrameRow) -> Result<Self, Self::Error> {
        Ok(Frame {
            id: FrameId::new(row.id)?,
            style: row.style,
            price: Amount::new(row.price)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FrameRepository for PostgresFrameRepository {
    async fn list(&self) -> DomainResult<Vec<Frame>> {
        let sql = format!("SELECT {COLUMNS} FROM frames ORDER BY style ASC");
        let rows = sqlx::query_as::<_, FrameRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Frame::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM frames")
            .fetch_one(&self.pool)
            .await
            .map(count_to_u64)
            .map_err(map_sqlx)
    }

    async fn find_by_id(&self, id: FrameId) -> DomainResult<Option<Frame>> {
        let sql = format!("SELECT {COLUMNS} FROM frames WHERE id = $1");
        let row = sqlx::query_as::<_, FrameRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Frame::try_from).transpose()
    }

    async fn insert(&self, frame: NewFrame) -> DomainResult<Frame> {
        let sql = format!(
            "INSERT INTO frames (style, price, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FrameRow>(&sql)
            .bind(frame.style)
            .bind(f64::from(frame.price))
            .bind(frame.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Frame::try_from(row)
    }

    async fn insert_many(&self, frames: Vec<NewFrame>) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        for frame in frames {
            // Concurrent first listings may both seed; the loser skips.
            sqlx::query(
                "INSERT INTO frames (style, price, created_at, updated_at)
                 VALUES ($1, $2, $3, $3)
                 ON CONFLICT ON CONSTRAINT frames_style_key DO NOTHING",
            )
            .bind(frame.style)
            .bind(f64::from(frame.price))
            .bind(frame.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)
    }

    async fn save(&self, frame: &Frame) -> DomainResult<Frame> {
        let sql = format!(
            "UPDATE frames SET style = $2, price = $3, updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FrameRow>(&sql)
            .bind(i64::from(frame.id))
            .bind(frame.style.as_str())
            .bind(f64::from(frame.price))
            .bind(frame.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Frame not found".into()))?;

        Frame::try_from(row)
    }

    async fn delete(&self, id: FrameId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM frames WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Frame not found".into()));
        }
        Ok(())
    }
}
