// src/infrastructure/repositories/postgres_order.rs
use super::map_sqlx;
use crate::domain::catalog::Amount;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{NewOrder, Order, OrderId, OrderItem, OrderRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};

const COLUMNS: &str = "id, user_id, items, total_amount, currency, payment_session_id, \
     payment_intent_id, payment_status, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: Option<String>,
    items: Json<Vec<OrderItem>>,
    total_amount: f64,
    currency: String,
    payment_session_id: String,
    payment_intent_id: Option<String>,
    payment_status: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId::new(row.id)?,
            user_id: row.user_id,
            items: row.items.0,
            total_amount: Amount::new(row.total_amount)?,
            currency: row.currency,
            payment_session_id: row.payment_session_id,
            payment_intent_id: row.payment_intent_id,
            payment_status: row.payment_status.parse()?,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn list(&self, user_id: Option<&str>) -> DomainResult<Vec<Order>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE ($1::TEXT IS NULL OR user_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Order::try_from).collect()
    }

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let sql = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Order::try_from).transpose()
    }

    async fn insert(&self, order: NewOrder) -> DomainResult<Order> {
        let sql = format!(
            "INSERT INTO orders (user_id, items, total_amount, currency, payment_session_id,
                 payment_intent_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(order.user_id)
            .bind(Json(order.items))
            .bind(f64::from(order.total_amount))
            .bind(order.currency)
            .bind(order.payment_session_id)
            .bind(order.payment_intent_id)
            .bind(order.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Order::try_from(row)
    }

    async fn save(&self, order: &Order) -> DomainResult<Order> {
        let sql = format!(
            "UPDATE orders
             SET payment_intent_id = $2, payment_status = $3, status = $4, updated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(i64::from(order.id))
            .bind(order.payment_intent_id.as_deref())
            .bind(order.payment_status.as_str())
            .bind(order.status.as_str())
            .bind(order.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Order not found".into()))?;

        Order::try_from(row)
    }
}
