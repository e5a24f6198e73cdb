// src/application/services/categories.rs
use std::sync::Arc;

use super::{empty_update, non_blank};
use crate::{
    application::{
        dto::{CategoryDto, CategoryListItemDto, GalleryDto, PhotoDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        catalog::{CategoryId, CategoryName, CategoryRepository, NewCategory, PhotoRepository},
        slug::{Slug, assign_slug},
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl UpdateCategoryCommand {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    photos: Arc<dyn PhotoRepository>,
    clock: Arc<dyn Clock>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        photos: Arc<dyn PhotoRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            categories,
            photos,
            clock,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryListItemDto>> {
        let categories = self.categories.list().await?;
        let mut items = Vec::with_capacity(categories.len());
        for category in categories {
            let featured_image = self
                .photos
                .find_featured_in(category.id)
                .await?
                .and_then(|photo| photo.image_url);
            items.push(CategoryListItemDto {
                category: category.into(),
                featured_image,
            });
        }
        Ok(items)
    }

    /// A category and its photos, newest first, looked up by slug.
    pub async fn gallery(&self, slug: String) -> ApplicationResult<GalleryDto> {
        let slug = Slug::new(slug)?;
        let category = self
            .categories
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category not found"))?;
        let photos = self.photos.list_by_category(category.id).await?;
        Ok(GalleryDto {
            category: category.into(),
            photos: photos.into_iter().map(PhotoDto::from).collect(),
        })
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = assign_slug(name.as_str(), None::<CategoryId>, &*self.categories).await?;

        let created = self
            .categories
            .insert(NewCategory {
                name,
                slug,
                description: command.description.and_then(non_blank),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(category_id = %created.id, slug = ?created.slug, "category created");
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        if command.is_empty() {
            return Err(empty_update());
        }
        let id = CategoryId::new(command.id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category not found"))?;

        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            if category.needs_slug_for(&name) {
                let slug = assign_slug(name.as_str(), Some(id), &*self.categories).await?;
                category.slug = Some(slug);
            }
            category.name = name;
        }

        if let Some(description) = command.description {
            category.description = description.and_then(non_blank);
        }

        category.updated_at = self.clock.now();
        let saved = self.categories.save(&category).await?;
        Ok(saved.into())
    }

    pub async fn delete_category(&self, id: i64) -> ApplicationResult<()> {
        let id = CategoryId::new(id)?;
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("Category not found"));
        }

        let photo_count = self.photos.count_by_category(id).await?;
        if photo_count > 0 {
            return Err(ApplicationError::referenced(
                "Cannot delete category with associated photos",
                format!(
                    "This category has {photo_count} photo(s). Please reassign or delete them first."
                ),
            ));
        }

        self.categories.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}
