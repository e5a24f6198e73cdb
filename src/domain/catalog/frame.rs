// src/domain/catalog/frame.rs
use crate::domain::catalog::Amount;
use crate::domain::entity_id;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

entity_id!(FrameId, "frame");

/// Frames offered when the catalog has none yet.
pub const DEFAULT_FRAMES: [(&str, f64); 4] = [
    ("Black", 50.0),
    ("White", 50.0),
    ("Natural Wood", 75.0),
    ("Walnut", 100.0),
];

#[derive(Debug, Clone)]
pub struct Frame {
    pub id: FrameId,
    pub style: String,
    pub price: Amount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFrame {
    pub style: String,
    pub price: Amount,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait FrameRepository: Send + Sync {
    /// All frames ordered by style.
    async fn list(&self) -> DomainResult<Vec<Frame>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn find_by_id(&self, id: FrameId) -> DomainResult<Option<Frame>>;
    /// Fails with `Conflict` when the style is already taken.
    async fn insert(&self, frame: NewFrame) -> DomainResult<Frame>;
    async fn insert_many(&self, frames: Vec<NewFrame>) -> DomainResult<()>;
    async fn save(&self, frame: &Frame) -> DomainResult<Frame>;
    async fn delete(&self, id: FrameId) -> DomainResult<()>;
}
