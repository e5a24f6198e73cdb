// src/application/services/mod.rs
mod categories;
mod formats;
mod frames;
mod orders;
mod photos;
mod prices;
mod sizes;

use std::sync::Arc;

pub use categories::{CategoryService, CreateCategoryCommand, UpdateCategoryCommand};
pub use formats::{CreateFormatCommand, FormatService, UpdateFormatCommand};
pub use frames::{CreateFrameCommand, FrameService, UpdateFrameCommand};
pub use orders::{CreateOrderCommand, OrderService, UpdateOrderStatusCommand};
pub use photos::{CreatePhotoCommand, PhotoService, UpdatePhotoCommand};
pub use prices::{CreatePriceCommand, PriceService, UpdatePriceCommand};
pub use sizes::{CreateSizeCommand, SizeService, UpdateSizeCommand};

use crate::{
    application::{error::ApplicationError, ports::time::Clock},
    domain::{
        catalog::{
            CategoryRepository, FormatRepository, FrameRepository, PhotoRepository,
            PriceRepository, SizeRepository,
        },
        order::OrderRepository,
    },
};

/// Storage ports the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub photos: Arc<dyn PhotoRepository>,
    pub sizes: Arc<dyn SizeRepository>,
    pub frames: Arc<dyn FrameRepository>,
    pub formats: Arc<dyn FormatRepository>,
    pub prices: Arc<dyn PriceRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

pub struct ApplicationServices {
    pub categories: Arc<CategoryService>,
    pub photos: Arc<PhotoService>,
    pub sizes: Arc<SizeService>,
    pub frames: Arc<FrameService>,
    pub formats: Arc<FormatService>,
    pub prices: Arc<PriceService>,
    pub orders: Arc<OrderService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>) -> Self {
        let categories = Arc::new(CategoryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.photos),
            Arc::clone(&clock),
        ));
        let photos = Arc::new(PhotoService::new(
            Arc::clone(&repos.photos),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.sizes),
            Arc::clone(&clock),
        ));
        let sizes = Arc::new(SizeService::new(
            Arc::clone(&repos.sizes),
            Arc::clone(&repos.photos),
            Arc::clone(&repos.prices),
            Arc::clone(&clock),
        ));
        let frames = Arc::new(FrameService::new(
            Arc::clone(&repos.frames),
            Arc::clone(&clock),
        ));
        let formats = Arc::new(FormatService::new(
            Arc::clone(&repos.formats),
            Arc::clone(&clock),
        ));
        let prices = Arc::new(PriceService::new(
            Arc::clone(&repos.prices),
            Arc::clone(&repos.sizes),
            Arc::clone(&clock),
        ));
        let orders = Arc::new(OrderService::new(Arc::clone(&repos.orders), clock));

        Self {
            categories,
            photos,
            sizes,
            frames,
            formats,
            prices,
            orders,
        }
    }
}

pub(crate) fn empty_update() -> ApplicationError {
    ApplicationError::validation("Request body cannot be empty")
}

/// Trims optional free text, treating blank input as absent.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
