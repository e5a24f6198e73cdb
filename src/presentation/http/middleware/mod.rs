// src/presentation/http/middleware/mod.rs
pub mod admin_gate;
pub mod cors;

pub use admin_gate::{AdminGate, require_admin};
pub use cors::{CorsPolicy, apply_cors};
