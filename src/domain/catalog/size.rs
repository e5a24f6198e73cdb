// src/domain/catalog/size.rs
use crate::domain::catalog::{Amount, required_label};
use crate::domain::entity_id;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

entity_id!(SizeId, "size");

pub const DEFAULT_SIZE_UNIT: &str = "in";

#[derive(Debug, Clone)]
pub struct Size {
    pub id: SizeId,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: String,
    pub price: Option<Amount>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSize {
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: String,
    pub price: Option<Amount>,
    pub created_at: DateTime<Utc>,
}

/// Validates a size label such as `8x10`.
pub fn size_name(value: impl Into<String>) -> DomainResult<String> {
    required_label(value, "Size name")
}

/// Validates a printed dimension; absent dimensions are allowed.
pub fn dimension(value: Option<f64>, label: &str) -> DomainResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(DomainError::Validation(format!(
            "{label} must be a positive number"
        ))),
        other => Ok(other),
    }
}

#[async_trait]
pub trait SizeRepository: Send + Sync {
    /// All sizes, newest first.
    async fn list(&self) -> DomainResult<Vec<Size>>;
    /// All sizes, cheapest first; sizes without a price sort last.
    async fn list_by_price(&self) -> DomainResult<Vec<Size>>;
    async fn find_by_id(&self, id: SizeId) -> DomainResult<Option<Size>>;
    async fn find_many(&self, ids: &[SizeId]) -> DomainResult<Vec<Size>>;
    async fn insert(&self, size: NewSize) -> DomainResult<Size>;
    async fn save(&self, size: &Size) -> DomainResult<Size>;
    async fn delete(&self, id: SizeId) -> DomainResult<()>;
}
