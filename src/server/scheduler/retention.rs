use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::Storage, error::AppError};

/// Starts the retention sweep scheduler.
///
/// Runs at the top of every hour and deletes messages past the retention
/// window through the storage contract. A tick that fires while the previous
/// sweep is still running is skipped (single-flight); a failed sweep is
/// logged and the schedule continues on the next tick.
///
/// The returned scheduler handle is kept by the connection manager so that
/// `stop()` can cancel pending ticks.
pub async fn start_scheduler(storage: Arc<dyn Storage>) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let guard = Arc::new(tokio::sync::Mutex::new(()));
    let job_storage = storage.clone();

    // Top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let storage = job_storage.clone();
        let guard = guard.clone();

        Box::pin(async move {
            let Ok(_running) = guard.try_lock() else {
                tracing::warn!("Previous retention sweep still running, skipping this tick");
                return;
            };

            run_sweep(storage.as_ref()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Retention scheduler started");

    Ok(scheduler)
}

/// One sweep cycle. Failures are contained here so the timer never dies.
pub async fn run_sweep(storage: &dyn Storage) {
    match storage.delete_old_messages().await {
        Ok(deleted) => {
            if deleted > 0 {
                tracing::info!("Retention sweep deleted {deleted} expired messages");
            } else {
                tracing::debug!("Retention sweep found no expired messages");
            }
        }
        Err(e) => tracing::error!("Retention sweep failed: {e}"),
    }
}
