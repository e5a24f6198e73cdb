// src/infrastructure/repositories/postgres_price.rs
use super::{count_to_u64, map_sqlx};
use crate::domain::catalog::{Amount, NewPrice, Price, PriceId, PriceRepository, SizeId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, size_id, price, label, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPriceRepository {
    pool: PgPool,
}

impl PostgresPriceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PriceRow {
    id: i64,
    size_id: i64,
    price: f64,
    label: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PriceRow> for Price {
    type Error = DomainError;

    fn try_from(row: PriceRow) -> Result<Self, Self::Error> {
        Ok(Price {
            id: PriceId::new(row.id)?,
            size_id: SizeId::new(row.size_id)?,
            price: Amount::new(row.price)?,
            label: row.label,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PriceRepository for PostgresPriceRepository {
    async fn list(&self) -> DomainResult<Vec<Price>> {
        let sql = format!("SELECT {COLUMNS} FROM prices ORDER BY price ASC, id ASC");
        let rows = sqlx::query_as::<_, PriceRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Price::try_from).collect()
    }

    async fn find_by_id(&self, id: PriceId) -> DomainResult<Option<Price>> {
        let sql = format!("SELECT {COLUMNS} FROM prices WHERE id = $1");
        let row = sqlx::query_as::<_, PriceRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Price::try_from).transpose()
    }

    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prices WHERE size_id = $1")
            .bind(i64::from(size))
            .fetch_one(&self.pool)
            .await
            .map(count_to_u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, price: NewPrice) -> DomainResult<Price> {
        let sql = format!(
            "INSERT INTO prices (size_id, price, label, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PriceRow>(&sql)
            .bind(i64::from(price.size_id))
            .bind(f64::from(price.price))
            .bind(price.label)
            .bind(price.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Price::try_from(row)
    }

    async fn save(&self, price: &Price) -> DomainResult<Price> {
        let sql = format!(
            "UPDATE prices SET size_id = $2, price = $3, label = $4, updated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PriceRow>(&sql)
            .bind(i64::from(price.id))
            .bind(i64::from(price.size_id))
            .bind(f64::from(price.price))
            .bind(price.label.as_deref())
            .bind(price.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Price not found".into()))?;

        Price::try_from(row)
    }

    async fn delete(&self, id: PriceId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM prices WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Price not found".into()));
        }
        Ok(())
    }
}
