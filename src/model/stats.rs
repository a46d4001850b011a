use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifetime totals for a single user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserSummaryDto {
    pub runs: i64,
    pub total_high_runes: i64,
    pub total_uniques: i64,
    pub total_sets: i64,
    /// High runes per run, `0.0` when the user has no runs
    pub average_high_runes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: usize,
    pub username: String,
    pub total_high_runes: i64,
    pub runs: i64,
    pub average_high_runes: f64,
}

/// Lifetime quantity of a single rune found by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RuneTallyDto {
    pub rune: String,
    pub quantity: i64,
    pub high: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DailyHighRunesDto {
    pub day: NaiveDate,
    pub high_runes: i64,
}
