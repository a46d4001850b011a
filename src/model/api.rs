use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response after a run was logged successfully
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogRunResponseDto {
    /// Always `"ok"` for a stored run
    pub status: String,
    /// High runes found in the submitted run
    pub hr: i32,
}
