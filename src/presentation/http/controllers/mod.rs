// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod fields;
pub mod formats;
pub mod frames;
pub mod orders;
pub mod photos;
pub mod prices;
pub mod sizes;
