// src/domain/catalog/category.rs
use crate::domain::entity_id;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

entity_id!(CategoryId, "category");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Category name is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// Rows created before slugs existed may not carry one.
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Whether renaming to `name` requires a fresh slug.
    pub fn needs_slug_for(&self, name: &CategoryName) -> bool {
        self.slug.is_none() || self.name != *name
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait CategoryRepository: SlugLookup<CategoryId> {
    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Persists every mutable field of `category`. Fails with `NotFound` when
    /// the row is gone.
    async fn save(&self, category: &Category) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}
