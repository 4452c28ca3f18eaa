//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// Body of every failed API response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// Errors

pub enum ApiError {
    /// The request is missing something required
    BadRequest(String),
    NotFound(String),
    /// Anything else. The source is logged but only `message` is
    /// returned to the client.
    Internal {
        message: String,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self::BadRequest(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn internal(message: &str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message: message.to_string(),
            source: source.into(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal { message, source } => {
                // Always log the error
                tracing::error!("{}: {:#}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::internal("Something went wrong", err)
    }
}

// Re-export public types from each route

pub mod profiles {
    pub use crate::api::routes::profiles::public::*;
}

pub mod push {
    pub use crate::api::routes::push::public::*;
}

pub mod watchlist {
    pub use crate::api::routes::watchlist::public::*;
}
