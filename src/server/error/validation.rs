use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("fill in the fields")]
    EmptyCredentials,
    #[error("unknown area: {0}")]
    UnknownArea(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("{field} must be a non-negative whole number, got {value:?}")]
    InvalidCount { field: &'static str, value: String },
    #[error("quantity of {rune} must be at least 1, got {quantity}")]
    InvalidQuantity { rune: String, quantity: i64 },
    #[error("unknown rune: {0}")]
    UnknownRune(String),
    #[error("high rune total {0} is too large for a single run")]
    HighRuneTotalTooLarge(i64),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
