// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::middleware::{AdminGate, CorsPolicy};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub gate: AdminGate,
    pub cors: Arc<CorsPolicy>,
}
