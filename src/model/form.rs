use serde::{Deserialize, Serialize};

/// Fields of the login and registration forms
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Fields of the run logging form.
///
/// Counts are kept as submitted, blank values count as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogRunForm {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub difficulty: String,
    /// Unique items found
    #[serde(default)]
    pub uniques: String,
    /// Set items found
    #[serde(default)]
    pub sets: String,
    /// JSON array of drops, e.g. `[{"rune":"Jah","qty":1}]`
    #[serde(default)]
    pub runes: String,
    /// Seconds the run timer was running
    #[serde(default)]
    pub session_secs: String,
}
