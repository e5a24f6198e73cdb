// src/application/dto/mod.rs
pub mod catalog;
pub mod orders;
pub mod serde_time;

pub use catalog::{
    CategoryDto, CategoryListItemDto, CategorySummaryDto, FormatDto, FrameDto, GalleryDto,
    PhotoDetailDto, PhotoDto, PriceDto, SizeDto,
};
pub use orders::{OrderDto, OrderItemDto};
