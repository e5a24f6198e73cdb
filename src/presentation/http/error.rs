// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    details: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Referenced { message, details } => Self {
                status: StatusCode::CONFLICT,
                message,
                details: Some(details),
            },
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) | DomainError::Invariant(msg) => Self::internal(msg),
        }
    }

    fn internal(message: String) -> Self {
        tracing::error!(error = %message, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error payload shared by every failing route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referenced_errors_carry_details() {
        let err = HttpError::from_error(ApplicationError::referenced(
            "Cannot delete category with associated photos",
            "This category has 2 photo(s).",
        ));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.details.as_deref(), Some("This category has 2 photo(s)."));
    }

    #[test]
    fn domain_errors_use_their_own_message() {
        let err = HttpError::from_error(DomainError::validation("Title is required").into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Title is required");

        let err = HttpError::from_error(DomainError::Invariant("slug space exhausted".into()).into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn gate_rejections_map_to_auth_statuses() {
        let err = HttpError::from_error(ApplicationError::unauthorized("missing"));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "missing");

        let err = HttpError::from_error(ApplicationError::forbidden("wrong"));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);

        let err = HttpError::from_error(ApplicationError::infrastructure("gate down"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "gate down");
    }
}
