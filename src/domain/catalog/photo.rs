// src/domain/catalog/photo.rs
use crate::domain::catalog::{category::CategoryId, size::SizeId};
use crate::domain::entity_id;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

entity_id!(PhotoId, "photo");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTitle(String);

impl PhotoTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Title is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhotoTitle> for String {
    fn from(value: PhotoTitle) -> Self {
        value.0
    }
}

/// Splits a comma-separated keyword string, dropping blank entries.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct Photo {
    pub id: PhotoId,
    pub title: PhotoTitle,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub public_id: Option<String>,
    pub category_id: Option<CategoryId>,
    pub featured: bool,
    pub full_length: bool,
    pub size_ids: Vec<SizeId>,
    pub use_default_sizes: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    pub fn needs_slug_for(&self, title: &PhotoTitle) -> bool {
        self.slug.is_none() || self.title != *title
    }

    /// Switches the photo between the shared size list and its own overrides.
    pub fn set_use_default_sizes(&mut self, use_default: bool) {
        self.use_default_sizes = use_default;
        if use_default {
            self.size_ids.clear();
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: PhotoTitle,
    pub slug: Slug,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub public_id: Option<String>,
    pub category_id: Option<CategoryId>,
    pub featured: bool,
    pub full_length: bool,
    pub size_ids: Vec<SizeId>,
    pub use_default_sizes: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PhotoRepository: SlugLookup<PhotoId> {
    /// All photos, newest first.
    async fn list(&self) -> DomainResult<Vec<Photo>>;
    /// Photos of one category, newest first.
    async fn list_by_category(&self, category: CategoryId) -> DomainResult<Vec<Photo>>;
    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Photo>>;
    async fn find_featured_in(&self, category: CategoryId) -> DomainResult<Option<Photo>>;
    async fn count_by_category(&self, category: CategoryId) -> DomainResult<u64>;
    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64>;
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo>;
    async fn save(&self, photo: &Photo) -> DomainResult<Photo>;
    async fn delete(&self, id: PhotoId) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_split_and_trimmed() {
        assert_eq!(
            split_keywords(" sunset, lake ,, mountains "),
            vec!["sunset", "lake", "mountains"]
        );
        assert!(split_keywords(" , ").is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(PhotoTitle::new("   ").is_err());
        assert_eq!(PhotoTitle::new(" Dawn ").unwrap().as_str(), "Dawn");
    }
}
