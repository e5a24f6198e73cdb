// src/application/services/photos.rs
use std::sync::Arc;

use super::{empty_update, non_blank};
use crate::{
    application::{
        dto::{CategorySummaryDto, PhotoDetailDto, PhotoDto, SizeDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        catalog::{
            CategoryId, CategoryRepository, NewPhoto, Photo, PhotoId, PhotoRepository, PhotoTitle,
            SizeId, SizeRepository,
        },
        slug::{Slug, assign_slug},
    },
};

pub struct CreatePhotoCommand {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub public_id: Option<String>,
    pub category_id: Option<i64>,
    pub featured: bool,
    pub full_length: bool,
    pub size_ids: Vec<i64>,
    pub use_default_sizes: bool,
}

/// Partial photo update. `Some(None)` on a nullable field clears it.
#[derive(Default)]
pub struct UpdatePhotoCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub keywords: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub public_id: Option<Option<String>>,
    pub category_id: Option<Option<i64>>,
    pub featured: Option<bool>,
    pub full_length: Option<bool>,
    pub size_ids: Option<Vec<i64>>,
    pub use_default_sizes: Option<bool>,
}

impl UpdatePhotoCommand {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.keywords.is_none()
            && self.image_url.is_none()
            && self.public_id.is_none()
            && self.category_id.is_none()
            && self.featured.is_none()
            && self.full_length.is_none()
            && self.size_ids.is_none()
            && self.use_default_sizes.is_none()
    }
}

pub struct PhotoService {
    photos: Arc<dyn PhotoRepository>,
    categories: Arc<dyn CategoryRepository>,
    sizes: Arc<dyn SizeRepository>,
    clock: Arc<dyn Clock>,
}

impl PhotoService {
    pub fn new(
        photos: Arc<dyn PhotoRepository>,
        categories: Arc<dyn CategoryRepository>,
        sizes: Arc<dyn SizeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            photos,
            categories,
            sizes,
            clock,
        }
    }

    pub async fn list_photos(&self) -> ApplicationResult<Vec<PhotoDto>> {
        let photos = self.photos.list().await?;
        Ok(photos.into_iter().map(PhotoDto::from).collect())
    }

    pub async fn get_photo(&self, id: i64) -> ApplicationResult<PhotoDto> {
        let id = PhotoId::new(id)?;
        self.load(id).await.map(Into::into)
    }

    /// Photo page lookup: includes the category summary and the sizes the
    /// photo can be ordered in.
    pub async fn get_photo_by_slug(&self, slug: String) -> ApplicationResult<PhotoDetailDto> {
        let slug = Slug::new(slug)?;
        let photo = self
            .photos
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Photo not found"))?;

        let category = match photo.category_id {
            Some(category_id) => self
                .categories
                .find_by_id(category_id)
                .await?
                .map(CategorySummaryDto::from),
            None => None,
        };

        let available_sizes = if photo.use_default_sizes {
            self.sizes.list_by_price().await?
        } else {
            self.sizes.find_many(&photo.size_ids).await?
        };

        Ok(PhotoDetailDto {
            photo: photo.into(),
            category,
            available_sizes: available_sizes.into_iter().map(SizeDto::from).collect(),
        })
    }

    pub async fn create_photo(&self, command: CreatePhotoCommand) -> ApplicationResult<PhotoDto> {
        let title = PhotoTitle::new(command.title)?;
        let category_id = self.resolve_category(command.category_id).await?;
        let size_ids = if command.use_default_sizes {
            Vec::new()
        } else {
            self.resolve_sizes(command.size_ids).await?
        };

        let slug = assign_slug(title.as_str(), None::<PhotoId>, &*self.photos).await?;
        tracing::debug!(%slug, "resolved photo slug");

        let created = self
            .photos
            .insert(NewPhoto {
                title,
                slug,
                description: command.description.and_then(non_blank),
                keywords: command.keywords,
                image_url: command.image_url.and_then(non_blank),
                public_id: command.public_id.and_then(non_blank),
                category_id,
                featured: command.featured,
                full_length: command.full_length,
                size_ids,
                use_default_sizes: command.use_default_sizes,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(photo_id = %created.id, slug = ?created.slug, "photo created");
        Ok(created.into())
    }

    pub async fn update_photo(&self, command: UpdatePhotoCommand) -> ApplicationResult<PhotoDto> {
        if command.is_empty() {
            return Err(empty_update());
        }
        let id = PhotoId::new(command.id)?;
        let mut photo = self.load(id).await?;

        if let Some(title) = command.title {
            let title = PhotoTitle::new(title)?;
            if photo.needs_slug_for(&title) {
                photo.slug = Some(assign_slug(title.as_str(), Some(id), &*self.photos).await?);
            }
            photo.title = title;
        }
        if let Some(description) = command.description {
            photo.description = description.and_then(non_blank);
        }
        if let Some(keywords) = command.keywords {
            photo.keywords = keywords;
        }
        if let Some(image_url) = command.image_url {
            photo.image_url = image_url.and_then(non_blank);
        }
        if let Some(public_id) = command.public_id {
            photo.public_id = public_id.and_then(non_blank);
        }
        if let Some(category_id) = command.category_id {
            photo.category_id = self.resolve_category(category_id).await?;
        }
        if let Some(featured) = command.featured {
            photo.featured = featured;
        }
        if let Some(full_length) = command.full_length {
            photo.full_length = full_length;
        }
        if let Some(size_ids) = command.size_ids {
            photo.size_ids = self.resolve_sizes(size_ids).await?;
        }
        if let Some(use_default) = command.use_default_sizes {
            photo.set_use_default_sizes(use_default);
        }

        photo.updated_at = self.clock.now();
        let saved = self.photos.save(&photo).await?;
        Ok(saved.into())
    }

    pub async fn delete_photo(&self, id: i64) -> ApplicationResult<()> {
        let id = PhotoId::new(id)?;
        let photo = self.load(id).await?;
        self.photos.delete(id).await?;
        // The image itself lives in the media service and is cleaned up there.
        tracing::info!(photo_id = %id, public_id = ?photo.public_id, "photo deleted");
        Ok(())
    }

    async fn load(&self, id: PhotoId) -> ApplicationResult<Photo> {
        self.photos
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Photo not found"))
    }

    async fn resolve_category(&self, id: Option<i64>) -> ApplicationResult<Option<CategoryId>> {
        let Some(raw) = id else {
            return Ok(None);
        };
        let id = CategoryId::new(raw)?;
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("Category not found"));
        }
        Ok(Some(id))
    }

    async fn resolve_sizes(&self, ids: Vec<i64>) -> ApplicationResult<Vec<SizeId>> {
        let mut size_ids = Vec::with_capacity(ids.len());
        for raw in ids {
            let id = SizeId::new(raw)?;
            if !size_ids.contains(&id) {
                size_ids.push(id);
            }
        }
        let found = self.sizes.find_many(&size_ids).await?;
        if found.len() != size_ids.len() {
            return Err(ApplicationError::not_found("Size not found"));
        }
        Ok(size_ids)
    }
}
