// src/domain/catalog/price.rs
use crate::domain::catalog::{Amount, size::SizeId};
use crate::domain::entity_id;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

entity_id!(PriceId, "price");

/// A price point attached to a size, optionally labelled ("Holiday Sale").
#[derive(Debug, Clone)]
pub struct Price {
    pub id: PriceId,
    pub size_id: SizeId,
    pub price: Amount,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPrice {
    pub size_id: SizeId,
    pub price: Amount,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Price>>;
    async fn find_by_id(&self, id: PriceId) -> DomainResult<Option<Price>>;
    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64>;
    /// Fails with `NotFound` when the referenced size does not exist.
    async fn insert(&self, price: NewPrice) -> DomainResult<Price>;
    async fn save(&self, price: &Price) -> DomainResult<Price>;
    async fn delete(&self, id: PriceId) -> DomainResult<()>;
}
