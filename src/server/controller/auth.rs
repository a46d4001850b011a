use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::form::CredentialsForm,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
        view::{
            self,
            auth::{LoginPage, RegisterPage},
        },
    },
};

pub static AUTH_TAG: &str = "auth";

/// Splits errors shown inline on a form from those handled by [`Error`]'s response mapping
fn form_error(err: Error) -> Result<(StatusCode, String), Error> {
    match err {
        Error::ValidationError(err) => Ok((StatusCode::BAD_REQUEST, err.to_string())),
        Error::ConflictError(_) => Ok((StatusCode::CONFLICT, "username already taken".to_string())),
        Error::AuthError(AuthError::InvalidCredentials) => {
            Ok((StatusCode::UNAUTHORIZED, "invalid credentials".to_string()))
        }
        err => Err(err),
    }
}

/// Redirects to the login page
#[utoipa::path(
    get,
    path = "/",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the login page"),
    ),
)]
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

/// Render the login form
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login form", content_type = "text/html", body = String),
    ),
)]
pub async fn login_page() -> Html<String> {
    view::render(rsx! { LoginPage {} })
}

/// Log in with username & password
///
/// Cycles the session ID and stores the user ID in the session on success.
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the dashboard
/// - 401 (Unauthorized): Unknown username or wrong password, login form re-rendered
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the dashboard"),
        (status = 401, description = "Invalid credentials, form re-rendered", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = match auth_service.login(&form.username, &form.password).await {
        Ok(user) => user,
        Err(err) => {
            let (status, message) = form_error(err)?;

            return Ok((status, view::render(rsx! { LoginPage { error: message } }))
                .into_response());
        }
    };

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::info!("User ID {} logged in", user.id);

    Ok(Redirect::to("/dashboard").into_response())
}

/// Render the registration form
#[utoipa::path(
    get,
    path = "/register",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Registration form", content_type = "text/html", body = String),
    ),
)]
pub async fn register_page() -> Html<String> {
    view::render(rsx! { RegisterPage {} })
}

/// Create an account
///
/// Does not log the new user in.
///
/// # Responses
/// - 303 (See Other): Account created, redirect to the login page
/// - 400 (Bad Request): Username or password empty, form re-rendered
/// - 409 (Conflict): Username taken, form re-rendered
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created, redirect to the login page"),
        (status = 400, description = "Empty fields, form re-rendered", content_type = "text/html", body = String),
        (status = 409, description = "Username taken, form re-rendered", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db);

    if let Err(err) = auth_service.register(&form.username, &form.password).await {
        let (status, message) = form_error(err)?;

        return Ok((status, view::render(rsx! { RegisterPage { error: message } }))
            .into_response());
    }

    Ok(Redirect::to("/login").into_response())
}

/// Logs the user out by flushing their session
///
/// Safe to call without a session.
///
/// # Responses
/// - 303 (See Other): Redirect to the login page
/// - 500 (Internal Server Error): Session store failure
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto),
    ),
)]
pub async fn logout(session: Session) -> Result<Redirect, Error> {
    if let Some(user_id) = SessionUserId::get(&session).await? {
        tracing::info!("User ID {} logged out", user_id);
    }

    session.flush().await?;

    Ok(Redirect::to("/login"))
}
