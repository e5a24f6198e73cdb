// src/presentation/http/controllers/categories.rs
use super::fields::double_option;
use crate::application::{
    dto::{CategoryDto, CategoryListItemDto, GalleryDto},
    services::{CreateCategoryCommand, UpdateCategoryCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    /// `null` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Categories sorted by name.", body = [CategoryListItemDto])
    ),
    security(()),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryListItemDto>>> {
    state
        .services
        .categories
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/gallery/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with its photos, newest first.", body = GalleryDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    security(()),
    tag = "Categories"
)]
pub async fn gallery(
    Extension(state): Extension<HttpState>,
    PathParam(slug): PathParam<String>,
) -> HttpResult<Json<GalleryDto>> {
    state
        .services
        .categories
        .gallery(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Blank name.", body = ErrorResponse),
        (status = 401, description = "Missing bearer token.", body = ErrorResponse),
        (status = 403, description = "Wrong admin token.", body = ErrorResponse),
        (status = 409, description = "Slug taken concurrently.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .categories
        .create_category(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 400, description = "Empty or invalid body.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .categories
        .update_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Photos still reference the category.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .categories
        .delete_category(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
