// src/infrastructure/repositories/postgres_size.rs
use super::map_sqlx;
use crate::domain::catalog::{Amount, NewSize, Size, SizeId, SizeRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, name, width, height, unit, price, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresSizeRepository {
    pool: PgPool,
}

impl PostgresSizeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str) -> DomainResult<Vec<Size>> {
        let rows = sqlx::query_as::<_, SizeRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Size::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct SizeRow {
    id: i64,
    name: String,
    width: Option<f64>,
    height: Option<f64>,
    unit: String,
    price: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SizeRow> for Size {
    type Error = DomainError;

    fn try_from(row: SizeRow) -> Result<Self, Self::Error> {
        Ok(Size {
            id: SizeId::new(row.id)?,
            name: row.name,
            width: row.width,
            height: row.height,
            unit: row.unit,
            price: row.price.map(Amount::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SizeRepository for PostgresSizeRepository {
    async fn list(&self) -> DomainResult<Vec<Size>> {
        self.fetch_all(&format!(
            "SELECT {COLUMNS} FROM sizes ORDER BY created_at DESC, id DESC"
        ))
        .await
    }

    async fn list_by_price(&self) -> DomainResult<Vec<Size>> {
        self.fetch_all(&format!(
            "SELECT {COLUMNS} FROM sizes ORDER BY price ASC NULLS LAST, id ASC"
        ))
        .await
    }

    async fn find_by_id(&self, id: SizeId) -> DomainResult<Option<Size>> {
        let sql = format!("SELECT {COLUMNS} FROM sizes WHERE id = $1");
        let row = sqlx::query_as::<_, SizeRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Size::try_from).transpose()
    }

    async fn find_many(&self, ids: &[SizeId]) -> DomainResult<Vec<Size>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = format!(
            "SELECT {COLUMNS} FROM sizes WHERE id = ANY($1)
             ORDER BY price ASC NULLS LAST, id ASC"
        );
        let rows = sqlx::query_as::<_, SizeRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Size::try_from).collect()
    }

    async fn insert(&self, size: NewSize) -> DomainResult<Size> {
        let sql = format!(
            "INSERT INTO sizes (name, width, height, unit, price, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SizeRow>(&sql)
            .bind(size.name)
            .bind(size.width)
            .bind(size.height)
            .bind(size.unit)
            .bind(size.price.map(f64::from))
            .bind(size.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Size::try_from(row)
    }

    async fn save(&self, size: &Size) -> DomainResult<Size> {
        let sql = format!(
            "UPDATE sizes
             SET name = $2, width = $3, height = $4, unit = $5, price = $6, updated_at = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SizeRow>(&sql)
            .bind(i64::from(size.id))
            .bind(size.name.as_str())
            .bind(size.width)
            .bind(size.height)
            .bind(size.unit.as_str())
            .bind(size.price.map(f64::from))
            .bind(size.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Size not found".into()))?;

        Size::try_from(row)
    }

    async fn delete(&self, id: SizeId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM sizes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Size not found".into()));
        }
        Ok(())
    }
}
