use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: "username already taken".to_string(),
            }),
        )
            .into_response()
    }
}
