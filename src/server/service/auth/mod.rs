//! Account registration and credential checks.

pub mod password;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, conflict::ConflictError, validation::ValidationError, Error},
    model::db::UserModel,
};

/// Runs CPU heavy password hashing on tokio's blocking pool
async fn run_blocking<T, F>(task: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {e}")))?
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Does not establish a session, the user logs in afterwards.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::ValidationError)` - Username or password is empty
    /// - `Err(Error::ConflictError)` - Username is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::EmptyCredentials.into());
        }

        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_username(username).await?.is_some() {
            return Err(ConflictError::UsernameTaken(username.to_string()).into());
        }

        let password = password.to_string();
        let password_hash = run_blocking(move || password::hash_password(&password)).await?;

        // A concurrent registration may still win the race to the unique index
        let user = user_repository
            .create(username, &password_hash)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Error::from(ConflictError::UsernameTaken(username.to_string()))
                }
                _ => Error::from(e),
            })?;

        tracing::info!("Registered user {} (ID {})", user.username, user.id);

        Ok(user)
    }

    /// Checks a username & password pair.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let candidate = password.to_string();

        let Some(user) = user_repository.get_by_username(username).await? else {
            run_blocking(move || {
                password::verify_dummy(&candidate);
                Ok(())
            })
            .await?;
            tracing::debug!("Login attempt for unknown username");

            return Err(AuthError::InvalidCredentials.into());
        };

        let password_hash = user.password_hash.clone();
        let verified =
            run_blocking(move || password::verify_password(&candidate, &password_hash)).await?;

        if !verified {
            tracing::debug!("Wrong password for user ID {}", user.id);

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

