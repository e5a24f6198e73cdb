// src/application/services/orders.rs
use std::sync::Arc;

use super::{empty_update, non_blank};
use crate::{
    application::{
        dto::{OrderDto, OrderItemDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        catalog::Amount,
        order::{
            NewOrder, OrderId, OrderItem, OrderRepository, OrderStatus, PaymentStatus,
            value_objects::DEFAULT_CURRENCY,
        },
    },
};

/// An order recorded from a completed storefront checkout.
pub struct CreateOrderCommand {
    pub user_id: Option<String>,
    pub items: Vec<OrderItemDto>,
    pub total_amount: f64,
    pub currency: Option<String>,
    pub payment_session_id: String,
    pub payment_intent_id: Option<String>,
}

#[derive(Default)]
pub struct UpdateOrderStatusCommand {
    pub id: i64,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { orders, clock }
    }

    pub async fn list_orders(&self, user_id: Option<String>) -> ApplicationResult<Vec<OrderDto>> {
        let user_id = user_id.and_then(non_blank);
        let orders = self.orders.list(user_id.as_deref()).await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    pub async fn get_order(&self, id: i64) -> ApplicationResult<OrderDto> {
        let id = OrderId::new(id)?;
        self.orders
            .find_by_id(id)
            .await?
            .map(OrderDto::from)
            .ok_or_else(|| ApplicationError::not_found("Order not found"))
    }

    pub async fn create_order(&self, command: CreateOrderCommand) -> ApplicationResult<OrderDto> {
        let new_order = NewOrder {
            user_id: command.user_id.and_then(non_blank),
            items: command.items.into_iter().map(OrderItem::from).collect(),
            total_amount: Amount::new(command.total_amount)?,
            currency: command
                .currency
                .and_then(non_blank)
                .map_or_else(|| DEFAULT_CURRENCY.to_string(), |c| c.to_lowercase()),
            payment_session_id: command.payment_session_id.trim().to_string(),
            payment_intent_id: command.payment_intent_id.and_then(non_blank),
            created_at: self.clock.now(),
        };
        new_order.validate()?;

        let created = self.orders.insert(new_order).await?;
        tracing::info!(
            order_id = %created.id,
            items = created.items.len(),
            total = f64::from(created.total_amount),
            "order recorded"
        );
        Ok(created.into())
    }

    pub async fn update_status(
        &self,
        command: UpdateOrderStatusCommand,
    ) -> ApplicationResult<OrderDto> {
        if command.status.is_none() && command.payment_status.is_none() {
            return Err(empty_update());
        }
        let id = OrderId::new(command.id)?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<OrderStatus>)
            .transpose()?;
        let payment_status = command
            .payment_status
            .as_deref()
            .map(str::parse::<PaymentStatus>)
            .transpose()?;

        let mut order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Order not found"))?;

        if let Some(status) = status {
            order.status = status;
        }
        if let Some(payment_status) = payment_status {
            order.payment_status = payment_status;
        }

        order.updated_at = self.clock.now();
        let saved = self.orders.save(&order).await?;
        tracing::info!(
            order_id = %saved.id,
            status = %saved.status,
            payment_status = %saved.payment_status,
            "order status updated"
        );
        Ok(saved.into())
    }
}
