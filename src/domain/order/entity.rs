// src/domain/order/entity.rs
use super::value_objects::{OrderId, OrderStatus, PaymentStatus};
use crate::domain::catalog::Amount;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One purchased print, captured as it was priced at checkout.
///
/// Stored as a JSON document, hence the serde derives on a domain type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub frame: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_id <= 0 {
            return Err(DomainError::validation("order item product_id must be positive"));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("order item title is required"));
        }
        Amount::new(self.unit_price)?;
        if self.quantity == 0 {
            return Err(DomainError::validation("order item quantity must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Amount,
    pub currency: String,
    pub payment_session_id: String,
    pub payment_intent_id: Option<String>,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Amount,
    pub currency: String,
    pub payment_session_id: String,
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.is_empty() {
            return Err(DomainError::validation("order must contain at least one item"));
        }
        for item in &self.items {
            item.validate()?;
        }
        if self.payment_session_id.trim().is_empty() {
            return Err(DomainError::validation("payment_session_id is required"));
        }
        Ok(())
    }
}
