// src/application/dto/orders.rs
use crate::domain::order::{Order, OrderItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
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
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            title: item.title,
            image_url: item.image_url,
            size: item.size,
            frame: item.frame,
            format: item.format,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItemDto> for OrderItem {
    fn from(item: OrderItemDto) -> Self {
        Self {
            product_id: item.product_id,
            title: item.title,
            image_url: item.image_url,
            size: item.size,
            frame: item.frame,
            format: item.format,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i64,
    pub user_id: Option<String>,
    pub items: Vec<OrderItemDto>,
    pub total_amount: f64,
    pub currency: String,
    pub payment_session_id: String,
    pub payment_intent_id: Option<String>,
    /// `pending`, `paid` or `failed`.
    pub payment_status: String,
    /// `created`, `paid`, `fulfilled`, `cancelled` or `expired`.
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.into(),
            user_id: order.user_id,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total_amount: order.total_amount.into(),
            currency: order.currency,
            payment_session_id: order.payment_session_id,
            payment_intent_id: order.payment_intent_id,
            payment_status: order.payment_status.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
