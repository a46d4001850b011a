use dioxus_logger::tracing::{self, Level};
use rune_ledger::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    reference::ReferenceData,
    router,
    scheduler::cron::start_scheduler,
    startup,
    store::DatabaseSessionStore,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _ = dioxus_logger::init(Level::INFO);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let mut scheduler = start_scheduler(DatabaseSessionStore::new(db.clone())).await?;

    let state = AppState {
        db: db.clone(),
        reference: Arc::new(ReferenceData::new()),
        unknown_rune_policy: config.unknown_rune_policy,
        leaderboard_limit: config.leaderboard_limit,
    };
    let app = startup::session_layer(router::routes().with_state(state), &db, &config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!(
        "Starting server on {} (unknown rune policy: {})",
        config.bind_addr,
        config.unknown_rune_policy
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    scheduler.shutdown().await?;

    Ok(())
}
