// src/domain/order/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewOrder, Order, OrderItem};
pub use repository::OrderRepository;
pub use value_objects::{OrderId, OrderStatus, PaymentStatus};
