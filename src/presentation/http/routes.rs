// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, formats, frames, orders, photos, prices, sizes},
    middleware::{apply_cors, require_admin},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let gate = state.gate.clone();
    let cors = Arc::clone(&state.cors);

    Router::new()
        .merge(openapi::docs_router())
        .route("/api", get(health))
        .route(
            "/api/categories",
            get(categories::list_categories)
                .post(categories::create_category.layer(from_fn(require_admin))),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update_category.layer(from_fn(require_admin)))
                .delete(categories::delete_category.layer(from_fn(require_admin))),
        )
        .route("/api/gallery/{slug}", get(categories::gallery))
        .route(
            "/api/photos",
            get(photos::list_photos).post(photos::create_photo.layer(from_fn(require_admin))),
        )
        .route("/api/photos/slug/{slug}", get(photos::get_photo_by_slug))
        .route(
            "/api/photos/{id}",
            get(photos::get_photo)
                .put(photos::update_photo.layer(from_fn(require_admin)))
                .delete(photos::delete_photo.layer(from_fn(require_admin))),
        )
        .route(
            "/api/sizes",
            get(sizes::list_sizes).post(sizes::create_size.layer(from_fn(require_admin))),
        )
        .route(
            "/api/sizes/{id}",
            put(sizes::update_size.layer(from_fn(require_admin)))
                .delete(sizes::delete_size.layer(from_fn(require_admin))),
        )
        .route(
            "/api/frames",
            get(frames::list_frames).post(frames::create_frame.layer(from_fn(require_admin))),
        )
        .route(
            "/api/frames/{id}",
            put(frames::update_frame.layer(from_fn(require_admin)))
                .delete(frames::delete_frame.layer(from_fn(require_admin))),
        )
        .route(
            "/api/formats",
            get(formats::list_formats).post(formats::create_format.layer(from_fn(require_admin))),
        )
        .route(
            "/api/formats/{id}",
            get(formats::get_format)
                .put(formats::update_format.layer(from_fn(require_admin)))
                .delete(formats::delete_format.layer(from_fn(require_admin))),
        )
        .route(
            "/api/prices",
            get(prices::list_prices).post(prices::create_price.layer(from_fn(require_admin))),
        )
        .route(
            "/api/prices/{id}",
            put(prices::update_price.layer(from_fn(require_admin)))
                .delete(prices::delete_price.layer(from_fn(require_admin))),
        )
        .route(
            "/api/orders",
            get(orders::list_orders.layer(from_fn(require_admin)))
                .post(orders::create_order.layer(from_fn(require_admin))),
        )
        .route(
            "/api/orders/{id}",
            get(orders::get_order.layer(from_fn(require_admin)))
                .put(orders::update_order.layer(from_fn(require_admin))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(gate))
        .layer(Extension(state))
        .layer(from_fn_with_state(cors, apply_cors))
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
        message: "API is running".into(),
    })
}
