use axum::{extract::FromRequestParts, http::request::Parts};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

/// The user behind the current session.
///
/// Extracting it is the single authentication gate of the protected routes: a request
/// without a session user is redirected to the login page before the handler runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Session holds the ID of an existing user
    /// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No user ID in session
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User ID in session no longer
    ///   exists, the session is flushed
    /// - `Err(Error)` - Session layer missing, session or database errors
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| Error::InternalError(message.to_string()))?;

        let Some(user_id) = SessionUserId::get(&session).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
            session.flush().await?;

            tracing::debug!(
                "Session flushed for user ID {} with active session but was not found in database",
                user_id
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Self {
            id: user.id,
            username: user.username,
        })
    }
}
