use axum::{extract::State, response::Html};
use dioxus::prelude::*;

use crate::server::{
    controller::{dashboard::PAGE_TAG, util::gate::AuthenticatedUser},
    error::Error,
    model::app::AppState,
    service::stats::StatsService,
    view::{self, leaderboard::LeaderboardPage, stats::StatsPage},
};

/// Days covered by the chart on the stats page
pub const STATS_CHART_DAYS: u64 = 14;
/// Runs listed on the stats page
pub const STATS_RECENT_RUNS: u64 = 20;

/// Render the top users by lifetime high runes
///
/// # Responses
/// - 200 (OK): Leaderboard page
/// - 303 (See Other): No valid session, redirect to the login page
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Leaderboard page", content_type = "text/html", body = String),
        (status = 303, description = "Not logged in, redirect to the login page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn leaderboard(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Html<String>, Error> {
    let stats_service = StatsService::new(&state.db, &state.reference);

    let entries = stats_service.leaderboard(state.leaderboard_limit).await?;

    Ok(view::render(rsx! { LeaderboardPage { entries: entries } }))
}

/// Render the user's own statistics: summary, daily chart, rune tally and recent runs
///
/// # Responses
/// - 200 (OK): Stats page
/// - 303 (See Other): No valid session, redirect to the login page
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/my-stats",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Stats page", content_type = "text/html", body = String),
        (status = 303, description = "Not logged in, redirect to the login page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn my_stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Html<String>, Error> {
    let stats_service = StatsService::new(&state.db, &state.reference);

    let summary = stats_service.user_summary(user.id).await?;
    let daily = stats_service
        .daily_high_runes(user.id, STATS_CHART_DAYS)
        .await?;
    let tally = stats_service.rune_tally(user.id).await?;
    let recent = stats_service
        .recent_runs(user.id, STATS_RECENT_RUNS)
        .await?;

    Ok(view::render(rsx! {
        StatsPage {
            username: user.username,
            summary: summary,
            daily: daily,
            tally: tally,
            recent: recent,
        }
    }))
}
