use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::DEFAULT_LEADERBOARD_LIMIT,
    reference::{ReferenceData, UnknownRunePolicy},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub reference: Arc<ReferenceData>,
    pub unknown_rune_policy: UnknownRunePolicy,
    pub leaderboard_limit: u64,
}

/// Builds a state with default settings around an existing connection, used by tests
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            reference: Arc::new(ReferenceData::new()),
            unknown_rune_policy: UnknownRunePolicy::default(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}
