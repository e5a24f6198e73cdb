// src/presentation/http/controllers/photos.rs
use super::fields::{KeywordsInput, double_option};
use crate::application::{
    dto::{PhotoDetailDto, PhotoDto},
    services::{CreatePhotoCommand, UpdatePhotoCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhotoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<KeywordsInput>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub full_length: bool,
    #[serde(default)]
    pub size_ids: Vec<i64>,
    #[serde(default = "default_true")]
    pub use_default_sizes: bool,
}

/// Partial update; a `null` on a nullable field clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePhotoRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub keywords: Option<KeywordsInput>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub public_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    pub featured: Option<bool>,
    pub full_length: Option<bool>,
    pub size_ids: Option<Vec<i64>>,
    pub use_default_sizes: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/photos",
    responses((status = 200, description = "Photos, newest first.", body = [PhotoDto])),
    security(()),
    tag = "Photos"
)]
pub async fn list_photos(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PhotoDto>>> {
    state
        .services
        .photos
        .list_photos()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, description = "The photo.", body = PhotoDto),
        (status = 404, description = "Unknown photo.", body = ErrorResponse)
    ),
    security(()),
    tag = "Photos"
)]
pub async fn get_photo(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<PhotoDto>> {
    state
        .services
        .photos
        .get_photo(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/photos/slug/{slug}",
    params(("slug" = String, Path, description = "Photo slug")),
    responses(
        (status = 200, description = "Photo with its category and purchasable sizes.", body = PhotoDetailDto),
        (status = 404, description = "Unknown photo.", body = ErrorResponse)
    ),
    security(()),
    tag = "Photos"
)]
pub async fn get_photo_by_slug(
    Extension(state): Extension<HttpState>,
    PathParam(slug): PathParam<String>,
) -> HttpResult<Json<PhotoDetailDto>> {
    state
        .services
        .photos
        .get_photo_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/photos",
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "Photo created.", body = PhotoDto),
        (status = 400, description = "Blank title.", body = ErrorResponse),
        (status = 404, description = "Unknown category or size.", body = ErrorResponse),
        (status = 409, description = "Slug taken concurrently.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn create_photo(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreatePhotoRequest>,
) -> HttpResult<(StatusCode, Json<PhotoDto>)> {
    let command = CreatePhotoCommand {
        title: payload.title,
        description: payload.description,
        keywords: payload
            .keywords
            .map(KeywordsInput::into_keywords)
            .unwrap_or_default(),
        image_url: payload.image_url,
        public_id: payload.public_id,
        category_id: payload.category_id,
        featured: payload.featured,
        full_length: payload.full_length,
        size_ids: payload.size_ids,
        use_default_sizes: payload.use_default_sizes,
    };

    state
        .services
        .photos
        .create_photo(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    request_body = UpdatePhotoRequest,
    responses(
        (status = 200, description = "Photo updated.", body = PhotoDto),
        (status = 400, description = "Empty or invalid body.", body = ErrorResponse),
        (status = 404, description = "Unknown photo, category or size.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn update_photo(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdatePhotoRequest>,
) -> HttpResult<Json<PhotoDto>> {
    let command = UpdatePhotoCommand {
        id,
        title: payload.title,
        description: payload.description,
        keywords: payload.keywords.map(KeywordsInput::into_keywords),
        image_url: payload.image_url,
        public_id: payload.public_id,
        category_id: payload.category_id,
        featured: payload.featured,
        full_length: payload.full_length,
        size_ids: payload.size_ids,
        use_default_sizes: payload.use_default_sizes,
    };

    state
        .services
        .photos
        .update_photo(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 204, description = "Photo deleted."),
        (status = 404, description = "Unknown photo.", body = ErrorResponse)
    ),
    tag = "Photos"
)]
pub async fn delete_photo(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .photos
        .delete_photo(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
