// src/presentation/http/controllers/orders.rs
use crate::application::{
    dto::{OrderDto, OrderItemDto},
    services::{CreateOrderCommand, UpdateOrderStatusCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OrderListParams {
    /// Only orders placed by this customer.
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub items: Vec<OrderItemDto>,
    pub total_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_session_id: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    /// `created`, `paid`, `fulfilled`, `cancelled` or `expired`.
    pub status: Option<String>,
    /// `pending`, `paid` or `failed`.
    pub payment_status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Orders, newest first.", body = [OrderDto]),
        (status = 401, description = "Missing bearer token.", body = ErrorResponse),
        (status = 403, description = "Wrong admin token.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    Extension(state): Extension<HttpState>,
    Query(params): Query<OrderListParams>,
) -> HttpResult<Json<Vec<OrderDto>>> {
    state
        .services
        .orders
        .list_orders(params.user_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order.", body = OrderDto),
        (status = 404, description = "Unknown order.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<OrderDto>> {
    state
        .services
        .orders
        .get_order(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order recorded.", body = OrderDto),
        (status = 400, description = "Invalid order.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateOrderRequest>,
) -> HttpResult<(StatusCode, Json<OrderDto>)> {
    let command = CreateOrderCommand {
        user_id: payload.user_id,
        items: payload.items,
        total_amount: payload.total_amount,
        currency: payload.currency,
        payment_session_id: payload.payment_session_id,
        payment_intent_id: payload.payment_intent_id,
    };

    state
        .services
        .orders
        .create_order(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated.", body = OrderDto),
        (status = 400, description = "Empty body or unknown status.", body = ErrorResponse),
        (status = 404, description = "Unknown order.", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateOrderRequest>,
) -> HttpResult<Json<OrderDto>> {
    let command = UpdateOrderStatusCommand {
        id,
        status: payload.status,
        payment_status: payload.payment_status,
    };

    state
        .services
        .orders
        .update_status(command)
        .await
        .into_http()
        .map(Json)
}
