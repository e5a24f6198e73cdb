// src/domain/catalog/format.rs
use crate::domain::catalog::Amount;
use crate::domain::entity_id;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

entity_id!(FormatId, "format");

/// A print medium (paper, canvas, metal...).
#[derive(Debug, Clone)]
pub struct Format {
    pub id: FormatId,
    pub name: String,
    pub price: Amount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFormat {
    pub name: String,
    pub price: Amount,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait FormatRepository: Send + Sync {
    /// All formats ordered by name.
    async fn list(&self) -> DomainResult<Vec<Format>>;
    async fn find_by_id(&self, id: FormatId) -> DomainResult<Option<Format>>;
    /// Fails with `Conflict` when the name is already taken.
    async fn insert(&self, format: NewFormat) -> DomainResult<Format>;
    async fn save(&self, format: &Format) -> DomainResult<Format>;
    async fn delete(&self, id: FormatId) -> DomainResult<()>;
}
