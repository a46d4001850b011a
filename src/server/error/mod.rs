//! Error types for the Rune Ledger server.
//!
//! Domain errors (authentication, validation, conflicts, configuration) live in their own
//! modules and are aggregated into [`Error`], which converts from the underlying library
//! errors via `?` and maps every variant onto an HTTP response.

pub mod auth;
pub mod config;
pub mod conflict;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, conflict::ConflictError,
        validation::ValidationError,
    },
};

/// Main error type for the Rune Ledger server.
///
/// # Error Categories
/// - Validation errors (missing or malformed form fields)
/// - Conflict errors (username already registered)
/// - Authentication errors (bad credentials, missing session)
/// - Persistence errors (`DbErr`: store unavailable, failed writes)
/// - Configuration, session and password hashing failures
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A required field is missing or malformed.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The request collides with existing data.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Hashing a password or reading a stored hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in Rune Ledger's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Binding the listener or serving requests failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other to `/login` - Protected route requested without a valid session
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Invalid credentials
/// - 409 Conflict - Username already taken
/// - 500 Internal Server Error - Everything else (logged, generic message)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
