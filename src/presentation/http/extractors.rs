// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    extract::{
        FromRequest, FromRequestParts, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

/// `axum::Json` whose rejection uses the service's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejection uses the service's error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(HttpError))]
pub struct PathParam<T>(pub T);

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        // Malformed and mistyped bodies are both plain bad requests.
        let status = match &rejection {
            JsonRejection::MissingJsonContentType(_) => rejection.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        HttpError::new(status, rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::new(rejection.status(), rejection.body_text())
    }
}
