// tests/support/helpers.rs
use super::memory::{MemoryStore, TickingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode, header};
use photo_admin::application::services::{ApplicationServices, Repositories};
use photo_admin::presentation::http::middleware::{AdminGate, CorsPolicy};
use photo_admin::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const ADMIN_KEY: &str = "test-admin-key";
pub const ALLOWED_ORIGIN: &str = "https://admin.example.com";

/// Router wired to a fresh in-memory store.
pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_origins(&[ALLOWED_ORIGIN])
    }

    pub fn with_origins(origins: &[&str]) -> Self {
        let store = Arc::new(MemoryStore::default());
        let repos = Repositories {
            categories: store.clone(),
            photos: store.clone(),
            sizes: store.clone(),
            frames: store.clone(),
            formats: store.clone(),
            prices: store.clone(),
            orders: store.clone(),
        };
        let services = ApplicationServices::new(repos, Arc::new(TickingClock::default()));
        let state = HttpState {
            services: Arc::new(services),
            gate: AdminGate::new(ADMIN_KEY),
            cors: Arc::new(CorsPolicy::new(origins.iter().map(|o| (*o).to_string()))),
        };
        Self {
            router: build_router(state),
            store,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(request(Method::GET, uri, None, None)).await
    }

    /// Sends `body` as JSON with the admin key.
    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        self.send(request(method, uri, Some(ADMIN_KEY), body)).await
    }

    /// Creates a resource as admin and returns its JSON, asserting 201.
    pub async fn create(&self, uri: &str, body: Value) -> Value {
        let resp = self.admin(Method::POST, uri, Some(body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "create {uri}");
        read_json(resp).await
    }
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and the `error` field of a JSON error body, returning
/// the whole body for further checks.
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, error: &str) -> Value {
    assert_eq!(resp.status(), status);
    let json = read_json(resp).await;
    assert_eq!(json["error"], error, "unexpected error body: {json}");
    json
}
