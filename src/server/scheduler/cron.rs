use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::store::DatabaseSessionStore;

/// Top of every hour
pub const SESSION_PURGE_CRON: &str = "0 0 * * * *";

/// Initialize and start the cron job scheduler
///
/// The returned scheduler keeps running in the background until it is shut down.
pub async fn start_scheduler(
    session_store: DatabaseSessionStore,
) -> Result<JobScheduler, JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    sched
        .add(Job::new_async(SESSION_PURGE_CRON, move |_, _| {
            let session_store = session_store.clone();

            Box::pin(async move {
                match session_store.delete_expired().await {
                    Ok(count) => tracing::info!("Purged {} expired session(s)", count),
                    Err(e) => tracing::error!("Error purging expired sessions: {:?}", e),
                }
            })
        })?)
        .await?;

    sched.start().await?;

    Ok(sched)
}
