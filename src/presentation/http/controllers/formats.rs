// src/presentation/http/controllers/formats.rs
use crate::application::{
    dto::FormatDto,
    services::{CreateFormatCommand, UpdateFormatCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFormatRequest {
    #[serde(default)]
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFormatRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/api/formats",
    responses((status = 200, description = "Formats sorted by name.", body = [FormatDto])),
    security(()),
    tag = "Formats"
)]
pub async fn list_formats(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<FormatDto>>> {
    state
        .services
        .formats
        .list_formats()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/formats/{id}",
    params(("id" = i64, Path, description = "Format id")),
    responses(
        (status = 200, description = "The format.", body = FormatDto),
        (status = 404, description = "Unknown format.", body = ErrorResponse)
    ),
    security(()),
    tag = "Formats"
)]
pub async fn get_format(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<FormatDto>> {
    state
        .services
        .formats
        .get_format(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/formats",
    request_body = CreateFormatRequest,
    responses(
        (status = 201, description = "Format created.", body = FormatDto),
        (status = 400, description = "Invalid format.", body = ErrorResponse),
        (status = 409, description = "Name already exists.", body = ErrorResponse)
    ),
    tag = "Formats"
)]
pub async fn create_format(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateFormatRequest>,
) -> HttpResult<(StatusCode, Json<FormatDto>)> {
    let command = CreateFormatCommand {
        name: payload.name,
        price: payload.price,
    };

    state
        .services
        .formats
        .create_format(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/formats/{id}",
    params(("id" = i64, Path, description = "Format id")),
    request_body = UpdateFormatRequest,
    responses(
        (status = 200, description = "Format updated.", body = FormatDto),
        (status = 404, description = "Unknown format.", body = ErrorResponse)
    ),
    tag = "Formats"
)]
pub async fn update_format(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateFormatRequest>,
) -> HttpResult<Json<FormatDto>> {
    let command = UpdateFormatCommand {
        id,
        name: payload.name,
        price: payload.price,
    };

    state
        .services
        .formats
        .update_format(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/formats/{id}",
    params(("id" = i64, Path, description = "Format id")),
    responses(
        (status = 204, description = "Format deleted."),
        (status = 404, description = "Unknown format.", body = ErrorResponse)
    ),
    tag = "Formats"
)]
pub async fn delete_format(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state.services.formats.delete_format(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
