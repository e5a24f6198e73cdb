// src/domain/order/repository.rs
use super::entity::{NewOrder, Order};
use super::value_objects::OrderId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders newest first, optionally restricted to one customer.
    async fn list(&self, user_id: Option<&str>) -> DomainResult<Vec<Order>>;
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>>;
    async fn insert(&self, order: NewOrder) -> DomainResult<Order>;
    async fn save(&self, order: &Order) -> DomainResult<Order>;
}
