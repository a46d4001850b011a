use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RuneDropDto {
    pub rune: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RunDto {
    pub id: i32,
    pub area: String,
    pub difficulty: String,
    pub unique_count: i32,
    pub set_count: i32,
    pub high_rune_count: i32,
    pub session_secs: i32,
    pub created_at: NaiveDateTime,
    pub drops: Vec<RuneDropDto>,
}
