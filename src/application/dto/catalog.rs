// src/application/dto/catalog.rs
use crate::domain::catalog::{Category, Format, Frame, Photo, Price, Size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.map(Into::into),
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// A category as listed for the storefront, with the image of one of its
/// featured photos.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListItemDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub featured_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
}

impl From<Category> for CategorySummaryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub public_id: Option<String>,
    pub category_id: Option<i64>,
    pub featured: bool,
    pub full_length: bool,
    pub size_ids: Vec<i64>,
    pub use_default_sizes: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoDto {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id.into(),
            title: photo.title.into(),
            slug: photo.slug.map(Into::into),
            description: photo.description,
            keywords: photo.keywords,
            image_url: photo.image_url,
            public_id: photo.public_id,
            category_id: photo.category_id.map(Into::into),
            featured: photo.featured,
            full_length: photo.full_length,
            size_ids: photo.size_ids.into_iter().map(Into::into).collect(),
            use_default_sizes: photo.use_default_sizes,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

/// Photo page payload: the photo, its category and the sizes it can be
/// ordered in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoDetailDto {
    #[serde(flatten)]
    pub photo: PhotoDto,
    pub category: Option<CategorySummaryDto>,
    pub available_sizes: Vec<SizeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryDto {
    pub category: CategoryDto,
    pub photos: Vec<PhotoDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeDto {
    pub id: i64,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: String,
    pub price: Option<f64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Size> for SizeDto {
    fn from(size: Size) -> Self {
        Self {
            id: size.id.into(),
            name: size.name,
            width: size.width,
            height: size.height,
            unit: size.unit,
            price: size.price.map(Into::into),
            created_at: size.created_at,
            updated_at: size.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FrameDto {
    pub id: i64,
    pub style: String,
    pub price: f64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Frame> for FrameDto {
    fn from(frame: Frame) -> Self {
        Self {
            id: frame.id.into(),
            style: frame.style,
            price: frame.price.into(),
            created_at: frame.created_at,
            updated_at: frame.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormatDto {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Format> for FormatDto {
    fn from(format: Format) -> Self {
        Self {
            id: format.id.into(),
            name: format.name,
            price: format.price.into(),
            created_at: format.created_at,
            updated_at: format.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceDto {
    pub id: i64,
    pub size_id: i64,
    /// The referenced size, when it still exists.
    pub size: Option<SizeDto>,
    pub price: f64,
    pub label: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl PriceDto {
    pub fn with_size(price: Price, size: Option<Size>) -> Self {
        Self {
            id: price.id.into(),
            size_id: price.size_id.into(),
            size: size.map(SizeDto::from),
            price: price.price.into(),
            label: price.label,
            created_at: price.created_at,
            updated_at: price.updated_at,
        }
    }
}
