// src/infrastructure/repositories/postgres_format.rs
use super::map_sqlx;
use crate::domain::catalog::{Amount, Format, FormatId, FormatRepository, NewFormat};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, name, price, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFormatRepository {
    pool: PgPool,
}

impl PostgresFormatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FormatRow {
    id: i64,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FormatRow> for Format {
    type Error = DomainError;

    fn try_from(row: FormatRow) -> Result<Self, Self::Error> {
        Ok(Format {
            id: FormatId::new(row.id)?,
            name: row.name,
            price: Amount::new(row.price)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FormatRepository for PostgresFormatRepository {
    async fn list(&self) -> DomainResult<Vec<Format>> {
        let sql = format!("SELECT {COLUMNS} FROM formats ORDER BY name ASC");
        let rows = sqlx::query_as::<_, FormatRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Format::try_from).collect()
    }

    async fn find_by_id(&self, id: FormatId) -> DomainResult<Option<Format>> {
        let sql = format!("SELECT {COLUMNS} FROM formats WHERE id = $1");
        let row = sqlx::query_as::<_, FormatRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Format::try_from).transpose()
    }

    async fn insert(&self, format: NewFormat) -> DomainResult<Format> {
        let sql = format!(
            "INSERT INTO formats (name, price, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FormatRow>(&sql)
            .bind(format.name)
            .bind(f64::from(format.price))
            .bind(format.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Format::try_from(row)
    }

    async fn save(&self, format: &Format) -> DomainResult<Format> {
        let sql = format!(
            "UPDATE formats SET name = $2, price = $3, updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FormatRow>(&sql)
            .bind(i64::from(format.id))
            .bind(format.name.as_str())
            .bind(f64::from(format.price))
            .bind(format.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Format not found".into()))?;

        Format::try_from(row)
    }

    async fn delete(&self, id: FormatId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM formats WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Format not found".into()));
        }
        Ok(())
    }
}
