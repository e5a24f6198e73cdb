// tests/support/memory.rs
//! In-memory implementation of every repository port, with the same
//! uniqueness rules the Postgres schema enforces.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use photo_admin::application::ports::time::Clock;
use photo_admin::domain::catalog::{
    Category, CategoryId, CategoryRepository, Format, FormatId, FormatRepository, Frame, FrameId,
    FrameRepository, NewCategory, NewFormat, NewFrame, NewPhoto, NewPrice, NewSize, Photo,
    PhotoId, PhotoRepository, Price, PriceId, PriceRepository, Size, SizeId, SizeRepository,
};
use photo_admin::domain::errors::{DomainError, DomainResult};
use photo_admin::domain::order::{NewOrder, Order, OrderId, OrderRepository};
use photo_admin::domain::slug::{Slug, SlugLookup};
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Clock that advances one second per reading, so creation order is
/// observable in "newest first" listings.
pub struct TickingClock {
    next: Mutex<DateTime<Utc>>,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            next: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

#[derive(Default)]
struct Tables {
    last_id: i64,
    categories: Vec<Category>,
    photos: Vec<Photo>,
    sizes: Vec<Size>,
    frames: Vec<Frame>,
    formats: Vec<Format>,
    prices: Vec<Price>,
    orders: Vec<Order>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// When set, slug lookups report every slug as free, so only the unique
    /// check on write can catch a duplicate.
    pub blind_slug_lookups: AtomicBool,
    /// When set, slug lookups fail as if the store were unreachable.
    pub fail_slug_lookups: AtomicBool,
    pub slug_lookups: AtomicUsize,
}

impl MemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn category_count(&self) -> usize {
        self.tables().categories.len()
    }

    pub fn photo_count(&self) -> usize {
        self.tables().photos.len()
    }

    fn lookup_visible(&self) -> DomainResult<bool> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_slug_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(!self.blind_slug_lookups.load(Ordering::SeqCst))
    }
}

fn slug_taken<'a>(mut slugs: impl Iterator<Item = (i64, Option<&'a Slug>)>, slug: &Slug, id: i64) -> bool {
    slugs.any(|(other, existing)| other != id && existing == Some(slug))
}

fn slug_conflict() -> DomainError {
    DomainError::Conflict("slug already exists".into())
}

/* ------------------------------- categories ------------------------------- */

#[async_trait]
impl SlugLookup<CategoryId> for MemoryStore {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<bool> {
        if !self.lookup_visible()? {
            return Ok(false);
        }
        let exclude = exclude.map_or(0, i64::from);
        let tables = self.tables();
        Ok(slug_taken(
            tables.categories.iter().map(|c| (i64::from(c.id), c.slug.as_ref())),
            slug,
            exclude,
        ))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut items = self.tables().categories.clone();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.tables().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .tables()
            .categories
            .iter()
            .find(|c| c.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables();
        if slug_taken(
            tables.categories.iter().map(|c| (i64::from(c.id), c.slug.as_ref())),
            &category.slug,
            0,
        ) {
            return Err(slug_conflict());
        }
        let created = Category {
            id: CategoryId::new(tables.next_id())?,
            name: category.name,
            slug: Some(category.slug),
            description: category.description,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn save(&self, category: &Category) -> DomainResult<Category> {
        let mut tables = self.tables();
        if let Some(slug) = &category.slug {
            if slug_taken(
                tables.categories.iter().map(|c| (i64::from(c.id), c.slug.as_ref())),
                slug,
                i64::from(category.id),
            ) {
                return Err(slug_conflict());
            }
        }
        let slot = tables
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| DomainError::NotFound("Category not found".into()))?;
        *slot = category.clone();
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::NotFound("Category not found".into()));
        }
        Ok(())
    }
}

/* --------------------------------- photos --------------------------------- */

fn newest_first(photos: &mut [Photo]) {
    photos.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
    });
}

#[async_trait]
impl SlugLookup<PhotoId> for MemoryStore {
    async fn slug_exists(&self, slug: &Slug, exclude: Option<PhotoId>) -> DomainResult<bool> {
        if !self.lookup_visible()? {
            return Ok(false);
        }
        let exclude = exclude.map_or(0, i64::from);
        let tables = self.tables();
        Ok(slug_taken(
            tables.photos.iter().map(|p| (i64::from(p.id), p.slug.as_ref())),
            slug,
            exclude,
        ))
    }
}

#[async_trait]
impl PhotoRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Photo>> {
        let mut items = self.tables().photos.clone();
        newest_first(&mut items);
        Ok(items)
    }

    async fn list_by_category(&self, category: CategoryId) -> DomainResult<Vec<Photo>> {
        let mut items: Vec<Photo> = self
            .tables()
            .photos
            .iter()
            .filter(|p| p.category_id == Some(category))
            .cloned()
            .collect();
        newest_first(&mut items);
        Ok(items)
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        Ok(self.tables().photos.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Photo>> {
        Ok(self
            .tables()
            .photos
            .iter()
            .find(|p| p.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn find_featured_in(&self, category: CategoryId) -> DomainResult<Option<Photo>> {
        let mut items: Vec<Photo> = self
            .tables()
            .photos
            .iter()
            .filter(|p| p.featured && p.category_id == Some(category))
            .cloned()
            .collect();
        newest_first(&mut items);
        Ok(items.into_iter().next())
    }

    async fn count_by_category(&self, category: CategoryId) -> DomainResult<u64> {
        let tables = self.tables();
        Ok(tables
            .photos
            .iter()
            .filter(|p| p.category_id == Some(category))
            .count() as u64)
    }

    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64> {
        let tables = self.tables();
        Ok(tables.photos.iter().filter(|p| p.size_ids.contains(&size)).count() as u64)
    }

    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let mut tables = self.tables();
        if slug_taken(
            tables.photos.iter().map(|p| (i64::from(p.id), p.slug.as_ref())),
            &photo.slug,
            0,
        ) {
            return Err(slug_conflict());
        }
        let created = Photo {
            id: PhotoId::new(tables.next_id())?,
            title: photo.title,
            slug: Some(photo.slug),
            description: photo.description,
            keywords: photo.keywords,
            image_url: photo.image_url,
            public_id: photo.public_id,
            category_id: photo.category_id,
            featured: photo.featured,
            full_length: photo.full_length,
            size_ids: photo.size_ids,
            use_default_sizes: photo.use_default_sizes,
            created_at: photo.created_at,
            updated_at: photo.created_at,
        };
        tables.photos.push(created.clone());
        Ok(created)
    }

    async fn save(&self, photo: &Photo) -> DomainResult<Photo> {
        let mut tables = self.tables();
        if let Some(slug) = &photo.slug {
            if slug_taken(
                tables.photos.iter().map(|p| (i64::from(p.id), p.slug.as_ref())),
                slug,
                i64::from(photo.id),
            ) {
                return Err(slug_conflict());
            }
        }
        let slot = tables
            .photos
            .iter_mut()
            .find(|p| p.id == photo.id)
            .ok_or_else(|| DomainError::NotFound("Photo not found".into()))?;
        *slot = photo.clone();
        Ok(photo.clone())
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.photos.len();
        tables.photos.retain(|p| p.id != id);
        if tables.photos.len() == before {
            return Err(DomainError::NotFound("Photo not found".into()));
        }
        Ok(())
    }
}

/* ---------------------------------- sizes --------------------------------- */

fn by_price(sizes: &mut [Size]) {
    sizes.sort_by(|a, b| match (a.price, b.price) {
        (Some(x), Some(y)) => x.value().total_cmp(&y.value()),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => i64::from(a.id).cmp(&i64::from(b.id)),
    });
}

#[async_trait]
impl SizeRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Size>> {
        let mut items = self.tables().sizes.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn list_by_price(&self) -> DomainResult<Vec<Size>> {
        let mut items = self.tables().sizes.clone();
        by_price(&mut items);
        Ok(items)
    }

    async fn find_by_id(&self, id: SizeId) -> DomainResult<Option<Size>> {
        Ok(self.tables().sizes.iter().find(|s| s.id == id).cloned())
    }

    async fn find_many(&self, ids: &[SizeId]) -> DomainResult<Vec<Size>> {
        let mut items: Vec<Size> = self
            .tables()
            .sizes
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect();
        by_price(&mut items);
        Ok(items)
    }

    async fn insert(&self, size: NewSize) -> DomainResult<Size> {
        let mut tables = self.tables();
        let created = Size {
            id: SizeId::new(tables.next_id())?,
            name: size.name,
            width: size.width,
            height: size.height,
            unit: size.unit,
            price: size.price,
            created_at: size.created_at,
            updated_at: size.created_at,
        };
        tables.sizes.push(created.clone());
        Ok(created)
    }

    async fn save(&self, size: &Size) -> DomainResult<Size> {
        let mut tables = self.tables();
        let slot = tables
            .sizes
            .iter_mut()
            .find(|s| s.id == size.id)
            .ok_or_else(|| DomainError::NotFound("Size not found".into()))?;
        *slot = size.clone();
        Ok(size.clone())
    }

    async fn delete(&self, id: SizeId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.sizes.len();
        tables.sizes.retain(|s| s.id != id);
        if tables.sizes.len() == before {
            return Err(DomainError::NotFound("Size not found".into()));
        }
        Ok(())
    }
}

/* --------------------------------- frames --------------------------------- */

fn style_conflict() -> DomainError {
    DomainError::Conflict("Frame style already exists".into())
}

#[async_trait]
impl FrameRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Frame>> {
        let mut items = self.tables().frames.clone();
        items.sort_by(|a, b| a.style.cmp(&b.style));
        Ok(items)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.tables().frames.len() as u64)
    }

    async fn find_by_id(&self, id: FrameId) -> DomainResult<Option<Frame>> {
        Ok(self.tables().frames.iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, frame: NewFrame) -> DomainResult<Frame> {
        let mut tables = self.tables();
        if tables.frames.iter().any(|f| f.style == frame.style) {
            return Err(style_conflict());
        }
        let created = Frame {
            id: FrameId::new(tables.next_id())?,
            style: frame.style,
            price: frame.price,
            created_at: frame.created_at,
            updated_at: frame.created_at,
        };
        tables.frames.push(created.clone());
        Ok(created)
    }

    async fn insert_many(&self, frames: Vec<NewFrame>) -> DomainResult<()> {
        for frame in frames {
            match FrameRepository::insert(self, frame).await {
                Ok(_) | Err(DomainError::Conflict(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    async fn save(&self, frame: &Frame) -> DomainResult<Frame> {
        let mut tables = self.tables();
        if tables
            .frames
            .iter()
            .any(|f| f.id != frame.id && f.style == frame.style)
        {
            return Err(style_conflict());
        }
        let slot = tables
            .frames
            .iter_mut()
            .find(|f| f.id == frame.id)
            .ok_or_else(|| DomainError::NotFound("Frame not found".into()))?;
        *slot = frame.clone();
        Ok(frame.clone())
    }

    async fn delete(&self, id: FrameId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.frames.len();
        tables.frames.retain(|f| f.id != id);
        if tables.frames.len() == before {
            return Err(DomainError::NotFound("Frame not found".into()));
        }
        Ok(())
    }
}

/* --------------------------------- formats -------------------------------- */

fn name_conflict() -> DomainError {
    DomainError::Conflict("Format name already exists".into())
}

#[async_trait]
impl FormatRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Format>> {
        let mut items = self.tables().formats.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: FormatId) -> DomainResult<Option<Format>> {
        Ok(self.tables().formats.iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, format: NewFormat) -> DomainResult<Format> {
        let mut tables = self.tables();
        if tables.formats.iter().any(|f| f.name == format.name) {
            return Err(name_conflict());
        }
        let created = Format {
            id: FormatId::new(tables.next_id())?,
            name: format.name,
            price: format.price,
            created_at: format.created_at,
            updated_at: format.created_at,
        };
        tables.formats.push(created.clone());
        Ok(created)
    }

    async fn save(&self, format: &Format) -> DomainResult<Format> {
        let mut tables = self.tables();
        if tables
            .formats
            .iter()
            .any(|f| f.id != format.id && f.name == format.name)
        {
            return Err(name_conflict());
        }
        let slot = tables
            .formats
            .iter_mut()
            .find(|f| f.id == format.id)
            .ok_or_else(|| DomainError::NotFound("Format not found".into()))?;
        *slot = format.clone();
        Ok(format.clone())
    }

    async fn delete(&self, id: FormatId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.formats.len();
        tables.formats.retain(|f| f.id != id);
        if tables.formats.len() == before {
            return Err(DomainError::NotFound("Format not found".into()));
        }
        Ok(())
    }
}

/* --------------------------------- prices --------------------------------- */

#[async_trait]
impl PriceRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Price>> {
        let mut items = self.tables().prices.clone();
        items.sort_by(|a, b| a.price.value().total_cmp(&b.price.value()));
        Ok(items)
    }

    async fn find_by_id(&self, id: PriceId) -> DomainResult<Option<Price>> {
        Ok(self.tables().prices.iter().find(|p| p.id == id).cloned())
    }

    async fn count_by_size(&self, size: SizeId) -> DomainResult<u64> {
        let tables = self.tables();
        Ok(tables.prices.iter().filter(|p| p.size_id == size).count() as u64)
    }

    async fn insert(&self, price: NewPrice) -> DomainResult<Price> {
        let mut tables = self.tables();
        if !tables.sizes.iter().any(|s| s.id == price.size_id) {
            return Err(DomainError::NotFound("Size not found".into()));
        }
        let created = Price {
            id: PriceId::new(tables.next_id())?,
            size_id: price.size_id,
            price: price.price,
            label: price.label,
            created_at: price.created_at,
            updated_at: price.created_at,
        };
        tables.prices.push(created.clone());
        Ok(created)
    }

    async fn save(&self, price: &Price) -> DomainResult<Price> {
        let mut tables = self.tables();
        let slot = tables
            .prices
            .iter_mut()
            .find(|p| p.id == price.id)
            .ok_or_else(|| DomainError::NotFound("Price not found".into()))?;
        *slot = price.clone();
        Ok(price.clone())
    }

    async fn delete(&self, id: PriceId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.prices.len();
        tables.prices.retain(|p| p.id != id);
        if tables.prices.len() == before {
            return Err(DomainError::NotFound("Price not found".into()));
        }
        Ok(())
    }
}

/* --------------------------------- orders --------------------------------- */

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn list(&self, user_id: Option<&str>) -> DomainResult<Vec<Order>> {
        let mut items: Vec<Order> = self
            .tables()
            .orders
            .iter()
            .filter(|o| user_id.is_none_or(|u| o.user_id.as_deref() == Some(u)))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        Ok(self.tables().orders.iter().find(|o| o.id == id).cloned())
    }

    async fn insert(&self, order: NewOrder) -> DomainResult<Order> {
        let mut tables = self.tables();
        let created = Order {
            id: OrderId::new(tables.next_id())?,
            user_id: order.user_id,
            items: order.items,
            total_amount: order.total_amount,
            currency: order.currency,
            payment_session_id: order.payment_session_id,
            payment_intent_id: order.payment_intent_id,
            payment_status: Default::default(),
            status: Default::default(),
            created_at: order.created_at,
            updated_at: order.created_at,
        };
        tables.orders.push(created.clone());
        Ok(created)
    }

    async fn save(&self, order: &Order) -> DomainResult<Order> {
        let mut tables = self.tables();
        let slot = tables
            .orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or_else(|| DomainError::NotFound("Order not found".into()))?;
        *slot = order.clone();
        Ok(order.clone())
    }
}
