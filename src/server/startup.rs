use axum::Router;
use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, SessionManagerLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    store::DatabaseSessionStore,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(config.database_timeout)
        .acquire_timeout(config.database_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database, migrations applied");

    Ok(db)
}

/// Wrap the router in a session layer persisting sessions to the database
///
/// Cookies are signed with `SESSION_SECRET` and expire after the configured days of
/// inactivity.
pub fn session_layer(
    router: Router,
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Router, Error> {
    let key = Key::try_from(config.session_secret.as_slice()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(DatabaseSessionStore::new(db.clone()))
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )))
        .with_signed(key);

    Ok(router.layer(session))
}
