// src/presentation/http/controllers/frames.rs
use crate::application::{
    dto::FrameDto,
    services::{CreateFrameCommand, UpdateFrameCommand},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFrameRequest {
    #[serde(default)]
    pub style: String,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFrameRequest {
    pub style: Option<String>,
    pub price: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/api/frames",
    responses((status = 200, description = "Frames sorted by style; defaults are seeded into an empty catalog.", body = [FrameDto])),
    security(()),
    tag = "Frames"
)]
pub async fn list_frames(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<FrameDto>>> {
    state
        .services
        .frames
        .list_frames()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/frames",
    request_body = CreateFrameRequest,
    responses(
        (status = 201, description = "Frame created.", body = FrameDto),
        (status = 400, description = "Invalid frame.", body = ErrorResponse),
        (status = 409, description = "Style already exists.", body = ErrorResponse)
    ),
    tag = "Frames"
)]
pub async fn create_frame(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateFrameRequest>,
) -> HttpResult<(StatusCode, Json<FrameDto>)> {
    let command = CreateFrameCommand {
        style: payload.style,
        price: payload.price,
    };

    state
        .services
        .frames
        .create_frame(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/frames/{id}",
    params(("id" = i64, Path, description = "Frame id")),
    request_body = UpdateFrameRequest,
    responses(
        (status = 200, description = "Frame updated.", body = FrameDto),
        (status = 404, description = "Unknown frame.", body = ErrorResponse),
        (status = 409, description = "Style already exists.", body = ErrorResponse)
    ),
    tag = "Frames"
)]
pub async fn update_frame(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateFrameRequest>,
) -> HttpResult<Json<FrameDto>> {
    let command = UpdateFrameCommand {
        id,
        style: payload.style,
        price: payload.price,
    };

    state
        .services
        .frames
        .update_frame(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/frames/{id}",
    params(("id" = i64, Path, description = "Frame id")),
    responses(
        (status = 204, description = "Frame deleted."),
        (status = 404, description = "Unknown frame.", body = ErrorResponse)
    ),
    tag = "Frames"
)]
pub async fn delete_frame(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state.services.frames.delete_frame(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
