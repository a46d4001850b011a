use axum::{extract::State, response::Html};
use dioxus::prelude::*;

use crate::server::{
    controller::util::gate::AuthenticatedUser,
    error::Error,
    model::app::AppState,
    service::stats::StatsService,
    view::{
        self,
        dashboard::{DashboardPage, RuneOption},
    },
};

pub static PAGE_TAG: &str = "page";

/// Render the dashboard with the user's summary and the run logging form
///
/// # Responses
/// - 200 (OK): Dashboard page
/// - 303 (See Other): No valid session, redirect to the login page
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Dashboard page", content_type = "text/html", body = String),
        (status = 303, description = "Not logged in, redirect to the login page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Html<String>, Error> {
    let stats_service = StatsService::new(&state.db, &state.reference);

    let summary = stats_service.user_summary(user.id).await?;

    let reference = &state.reference;
    let areas = reference.areas().to_vec();
    let difficulties = reference
        .difficulties()
        .iter()
        .map(|difficulty| difficulty.as_str())
        .collect::<Vec<_>>();
    let runes = reference
        .runes()
        .iter()
        .map(|rune| RuneOption {
            name: rune.clone(),
            high: reference.is_high_rune(rune),
        })
        .collect::<Vec<_>>();

    Ok(view::render(rsx! {
        DashboardPage {
            username: user.username,
            summary: summary,
            areas: areas,
            difficulties: difficulties,
            runes: runes,
        }
    }))
}
