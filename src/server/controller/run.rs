use axum::{extract::State, Form, Json};

use crate::{
    model::{api::LogRunResponseDto, form::LogRunForm},
    server::{
        controller::util::gate::AuthenticatedUser,
        error::Error,
        model::{app::AppState, run::RunSubmission},
        service::run::RunService,
    },
};

pub static RUN_TAG: &str = "run";

/// Log a farming run with its rune drops
///
/// Drops are submitted as a JSON array in the `runes` field, malformed JSON counts as no
/// drops. Blank unique & set counts count as zero.
///
/// # Responses
/// - 200 (OK): Run stored, returns the high rune count of this run
/// - 303 (See Other): No valid session, redirect to the login page
/// - 400 (Bad Request): Unknown area or difficulty, invalid count or quantity, or unknown rune
///   when unknown runes are rejected
/// - 500 (Internal Server Error): Database failure, nothing was stored
#[utoipa::path(
    post,
    path = "/log-run",
    tag = RUN_TAG,
    request_body(content = LogRunForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Run stored", body = LogRunResponseDto),
        (status = 303, description = "Not logged in, redirect to the login page"),
        (status = 400, description = "Invalid submission", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn log_run(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Form(form): Form<LogRunForm>,
) -> Result<Json<LogRunResponseDto>, Error> {
    let submission = RunSubmission::try_from(form)?;

    let run_service = RunService::new(&state.db, &state.reference, state.unknown_rune_policy);
    let hr = run_service.log_run(user.id, &submission).await?;

    Ok(Json(LogRunResponseDto {
        status: "ok".to_string(),
        hr,
    }))
}
