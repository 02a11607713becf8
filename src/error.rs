use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// ApiError
///
/// The complete failure taxonomy of the API. Every handler converts its failures
/// into one of these variants, so nothing else ever reaches the transport layer.
/// Each variant carries the human-readable message returned to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or malformed (400).
    #[error("{0}")]
    Validation(String),
    /// A uniqueness constraint (case-insensitive title) was violated (400).
    #[error("{0}")]
    Duplicate(String),
    /// The referenced identifier does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// Missing, invalid, or expired credentials (401).
    #[error("{0}")]
    Auth(String),
    /// Unexpected failure, typically from the database (500).
    #[error("{0}")]
    Server(String),
}

/// ErrorBody
///
/// The JSON shape of every user-visible failure: a single `message` field,
/// no structured error codes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    /// Maps a variant to its HTTP status code.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// db
    ///
    /// Adapter for repository failures. Returns a closure suitable for `map_err`
    /// that logs the underlying database error and replaces it with a `Server`
    /// variant carrying the operation-specific message, e.g.:
    ///
    /// ```ignore
    /// repo.get_sponsors().await.map_err(ApiError::db("Server error while fetching sponsors"))?
    /// ```
    pub fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |e| {
            tracing::error!("{context}: {e:?}");
            ApiError::Server(context.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
