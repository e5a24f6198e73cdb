// src/presentation/http/controllers/prices.rs
use super::fields::double_option;
use crate::application::{
    dto::PriceDto,
    services::{CreatePriceCommand, UpdatePriceCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePriceRequest {
    pub size_id: i64,
    pub price: f64,
    /// Free-form tag such as "Holiday Sale".
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePriceRequest {
    pub size_id: Option<i64>,
    pub price: Option<f64>,
    /// `null` removes the label.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub label: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/api/prices",
    responses((status = 200, description = "Prices with their size.", body = [PriceDto])),
    security(()),
    tag = "Prices"
)]
pub async fn list_prices(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PriceDto>>> {
    state
        .services
        .prices
        .list_prices()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/prices",
    request_body = CreatePriceRequest,
    responses(
        (status = 201, description = "Price created.", body = PriceDto),
        (status = 400, description = "Invalid price.", body = ErrorResponse),
        (status = 404, description = "Unknown size.", body = ErrorResponse)
    ),
    tag = "Prices"
)]
pub async fn create_price(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreatePriceRequest>,
) -> HttpResult<(StatusCode, Json<PriceDto>)> {
    let command = CreatePriceCommand {
        size_id: payload.size_id,
        price: payload.price,
        label: payload.label,
    };

    state
        .services
        .prices
        .create_price(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/prices/{id}",
    params(("id" = i64, Path, description = "Price id")),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Price updated.", body = PriceDto),
        (status = 404, description = "Unknown price or size.", body = ErrorResponse)
    ),
    tag = "Prices"
)]
pub async fn update_price(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdatePriceRequest>,
) -> HttpResult<Json<PriceDto>> {
    let command = UpdatePriceCommand {
        id,
        size_id: payload.size_id,
        price: payload.price,
        label: payload.label,
    };

    state
        .services
        .prices
        .update_price(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/prices/{id}",
    params(("id" = i64, Path, description = "Price id")),
    responses(
        (status = 204, description = "Price deleted."),
        (status = 404, description = "Unknown price.", body = ErrorResponse)
    ),
    tag = "Prices"
)]
pub async fn delete_price(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state.services.prices.delete_price(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
