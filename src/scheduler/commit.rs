use std::sync::Arc;

use crate::data::database::DatabaseHandle;
use crate::scheduler::{JobFn, JobFuture};

/// Every minute, at second 0.
pub const COMMIT_SCHEDULE: &str = "0 * * * * *";

/// Builds the job that periodically commits the database.
///
/// A failed commit is logged and retried on the next trigger; it never stops
/// the scheduler.
pub fn commit_job(database: Arc<dyn DatabaseHandle>) -> JobFn {
    Arc::new(move || -> JobFuture {
        let database = database.clone();

        Box::pin(async move {
            if let Err(e) = database.commit().await {
                tracing::error!("Periodic database commit failed: {}", e);
            }
        })
    })
}
