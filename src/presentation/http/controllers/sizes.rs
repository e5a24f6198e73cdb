// src/presentation/http/controllers/sizes.rs
use crate::application::{
    dto::SizeDto,
    services::{CreateSizeCommand, UpdateSizeCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSizeRequest {
    #[serde(default)]
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Defaults to `in`.
    pub unit: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSizeRequest {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/api/sizes",
    responses((status = 200, description = "Sizes, newest first.", body = [SizeDto])),
    security(()),
    tag = "Sizes"
)]
pub async fn list_sizes(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<SizeDto>>> {
    state
        .services
        .sizes
        .list_sizes()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/sizes",
    request_body = CreateSizeRequest,
    responses(
        (status = 201, description = "Size created.", body = SizeDto),
        (status = 400, description = "Invalid size.", body = ErrorResponse)
    ),
    tag = "Sizes"
)]
pub async fn create_size(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateSizeRequest>,
) -> HttpResult<(StatusCode, Json<SizeDto>)> {
    let command = CreateSizeCommand {
        name: payload.name,
        width: payload.width,
        height: payload.height,
        unit: payload.unit,
        price: payload.price,
    };

    state
        .services
        .sizes
        .create_size(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/sizes/{id}",
    params(("id" = i64, Path, description = "Size id")),
    request_body = UpdateSizeRequest,
    responses(
        (status = 200, description = "Size updated.", body = SizeDto),
        (status = 400, description = "Empty or invalid body.", body = ErrorResponse),
        (status = 404, description = "Unknown size.", body = ErrorResponse)
    ),
    tag = "Sizes"
)]
pub async fn update_size(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateSizeRequest>,
) -> HttpResult<Json<SizeDto>> {
    let command = UpdateSizeCommand {
        id,
        name: payload.name,
        width: payload.width,
        height: payload.height,
        unit: payload.unit,
        price: payload.price,
    };

    state
        .services
        .sizes
        .update_size(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/sizes/{id}",
    params(("id" = i64, Path, description = "Size id")),
    responses(
        (status = 204, description = "Size deleted."),
        (status = 404, description = "Unknown size.", body = ErrorResponse),
        (status = 409, description = "Photos or prices still reference the size.", body = ErrorResponse)
    ),
    tag = "Sizes"
)]
pub async fn delete_size(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state.services.sizes.delete_size(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
