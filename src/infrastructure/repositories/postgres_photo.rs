// src/infrastructure/repositories/postgres_photo.rs
use super::{count_to_u64, map_sqlx};
use crate::domain::catalog::{
    CategoryId, NewPhoto, Photo, PhotoId, PhotoRepository, PhotoTitle, SizeId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, title, slug, description, keywords, image_url, public_id, \
     category_id, featured, full_length, size_ids, use_default_sizes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPhotoRepository {
    pool: PgPool,
}

impl PostgresPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str, category: Option<CategoryId>) -> DomainResult<Vec<Photo>> {
        let mut query = sqlx::query_as::<_, PhotoRow>(sql);
        if let Some(category) = category {
            query = query.bind(i64::from(category));
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;
        rows.into_iter().map(Photo::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct PhotoRow {
    id: i64,
    title: String,
    slug: Option<String>,
    description: Option<String>,
    keywords: Vec<String>,
    image_url: Option<String>,
    public_id: Option<String>,
    category_id: Option<i64>,
    featured: bool,
    full_length: bool,
    size_ids: Vec<i64>,
    use_default_sizes: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = DomainError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        Ok(Photo {
            id: PhotoId::new(row.id)?,
            title: PhotoTitle::new(row.title)?,
            slug: row.slug.map(Slug::new).transpose()?,
            description: row.description,
            keywords: row.keywords,
            image_url: row.image_url,
            public_id: row.public_id,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            featured: row.featured,
            full_length: row.full_length,
            size_ids: row
                .size_ids
                .into_iter()
                .map(SizeId::new)
                .collect::<DomainResult<_>>()?,
            use_default_sizes: row.use_default_sizes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn size_ids(ids: &[SizeId]) -> Vec<i64> {
    ids.iter().copied().map(i64::from).collect()
}

#[async_trait]
impl SlugLookup<PhotoId> for PostgresPhotoRepository {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<PhotoId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM photos
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl PhotoRepository for PostgresPhotoRepository {
    async fn list(&self) -> DomainResult<Vec<Photo>> {
        let sql = format!("SELECT {COLUMNS} FROM photos ORDER BY created_at DESC, id DESC");
        self.fetch_all(&sql, None).await
    }

    async fn list_by_category(&self, category: CategoryId) -> DomainResult<Vec<Photo>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM photos WHERE category_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        self.fetch_all(&sql, Some(category)).await
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        let sql = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Photo::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Photo>> {
        let sql = format!("SELECT {COLUMNS} FROM photos WHERE slug = $1");
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Photo::try_from).transpose()
    }

    async fn find_featured_in(&self, category: CategoryId) -> DomainResult<Option<Photo>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM photos
             WHERE category_id = $1 AND featured
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(i64::from(category))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Photo::try_from).transpose()
    }

    async fn count_by_category(&self, category: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos WHERE category_id = $1")
            .bind(i64::from(category))
            .fetch_one(&self.pool)
            .await
            .map(count_to_u64)
            .map_err(map_sqlx)
    }

    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos WHERE $1 = ANY(size_ids)")
            .bind(i64::from(size))
            .fetch_one(&self.pool)
            .await
            .map(count_to_u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let sql = format!(
            "INSERT INTO photos (title, slug, description, keywords, image_url, public_id,
                 category_id, featured, full_length, size_ids, use_default_sizes,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(photo.title.as_str())
            .bind(photo.slug.as_str())
            .bind(photo.description.as_deref())
            .bind(photo.keywords.as_slice())
            .bind(photo.image_url.as_deref())
            .bind(photo.public_id.as_deref())
            .bind(photo.category_id.map(i64::from))
            .bind(photo.featured)
            .bind(photo.full_length)
            .bind(size_ids(&photo.size_ids))
            .bind(photo.use_default_sizes)
            .bind(photo.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Photo::try_from(row)
    }

    async fn save(&self, photo: &Photo) -> DomainResult<Photo> {
        let sql = format!(
            "UPDATE photos
             SET title = $2, slug = $3, description = $4, keywords = $5, image_url = $6,
                 public_id = $7, category_id = $8, featured = $9, full_length = $10,
                 size_ids = $11, use_default_sizes = $12, updated_at = $13
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(i64::from(photo.id))
            .bind(photo.title.as_str())
            .bind(photo.slug.as_ref().map(Slug::as_str))
            .bind(photo.description.as_deref())
            .bind(photo.keywords.as_slice())
            .bind(photo.image_url.as_deref())
            .bind(photo.public_id.as_deref())
            .bind(photo.category_id.map(i64::from))
            .bind(photo.featured)
            .bind(photo.full_length)
            .bind(size_ids(&photo.size_ids))
            .bind(photo.use_default_sizes)
            .bind(photo.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Photo not found".into()))?;

        Photo::try_from(row)
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Photo not found".into()));
        }
        Ok(())
    }
}
