// src/presentation/http/middleware/admin_gate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use sha2::{Digest, Sha256};
use std::{fmt, sync::Arc};

pub const MISSING_TOKEN: &str = "Unauthorized - Missing or invalid token";
pub const WRONG_TOKEN: &str = "Forbidden: Admin access required";
pub const GATE_FAILURE: &str = "Authentication error";

/// The shared admin secret, kept only as a SHA-256 digest.
///
/// Presented tokens are hashed too and compared over all 32 bytes.
#[derive(Clone)]
pub struct AdminGate {
    digest: Arc<[u8; 32]>,
}

impl AdminGate {
    pub fn new(api_key: &str) -> Self {
        Self {
            digest: Arc::new(digest(api_key)),
        }
    }

    pub fn accepts(&self, token: &str) -> bool {
        let presented = digest(token);
        presented
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn reject(err: ApplicationError) -> Response {
    HttpError::from_error(err).into_response()
}

/// Lets the request through only when it carries `Authorization: Bearer <admin key>`.
///
/// Layered onto individual handlers with
/// `handler.layer(axum::middleware::from_fn(require_admin))`; the handler
/// receives the request untouched. The scheme name is matched
/// case-insensitively (`bearer` and `BEARER` are accepted); the token is not.
pub async fn require_admin(req: Request, next: Next) -> Response {
    let Some(gate) = req.extensions().get::<AdminGate>().cloned() else {
        tracing::error!(path = %req.uri().path(), "admin gate is not configured");
        return reject(ApplicationError::infrastructure(GATE_FAILURE));
    };

    let Some(Authorization(bearer)) = req.headers().typed_get::<Authorization<Bearer>>() else {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "rejected request without bearer token"
        );
        return reject(ApplicationError::unauthorized(MISSING_TOKEN));
    };

    if !gate.accepts(bearer.token()) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "rejected request with wrong admin token"
        );
        return reject(ApplicationError::forbidden(WRONG_TOKEN));
    }

    next.run(req).await
}
