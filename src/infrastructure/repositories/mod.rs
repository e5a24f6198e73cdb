// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_format;
mod postgres_frame;
mod postgres_order;
mod postgres_photo;
mod postgres_price;
mod postgres_size;

pub(crate) use error::{count_to_u64, map_sqlx};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_format::PostgresFormatRepository;
pub use postgres_frame::PostgresFrameRepository;
pub use postgres_order::PostgresOrderRepository;
pub use postgres_photo::PostgresPhotoRepository;
pub use postgres_price::PostgresPriceRepository;
pub use postgres_size::PostgresSizeRepository;
