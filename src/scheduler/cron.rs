use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use serenity::async_trait;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::{lifecycle::LifecycleError, AppError};
use crate::scheduler::{JobFn, Scheduler};

/// `Scheduler` backed by `tokio-cron-scheduler`.
///
/// Jobs are evaluated in UTC, the library default.
pub struct CronScheduler {
    inner: JobScheduler,
    started: AtomicBool,
}

impl CronScheduler {
    pub async fn new() -> Result<Self, AppError> {
        Ok(Self {
            inner: JobScheduler::new().await?,
            started: AtomicBool::new(false),
        })
    }
}

/// Runs `start` unless `started` is already latched.
///
/// The latch is taken before `start` runs so concurrent callers cannot both
/// start, and released again if `start` fails.
async fn start_once<F>(started: &AtomicBool, start: F) -> Result<(), AppError>
where
    F: Future<Output = Result<(), AppError>>,
{
    if started.swap(true, Ordering::SeqCst) {
        return Err(LifecycleError::SchedulerAlreadyStarted.into());
    }

    if let Err(e) = start.await {
        started.store(false, Ordering::SeqCst);
        return Err(e);
    }

    Ok(())
}

#[async_trait]
impl Scheduler for CronScheduler {
    async fn start(&self) -> Result<(), AppError> {
        start_once(&self.started, async {
            self.inner.start().await.map_err(AppError::from)
        })
        .await?;

        tracing::debug!("Job scheduler started");

        Ok(())
    }

    async fn add_cron_job(&self, schedule: &str, job: JobFn) -> Result<(), AppError> {
        if !self.started.load(Ordering::SeqCst) {
            return Err(LifecycleError::SchedulerNotStarted.into());
        }

        let job = Job::new_async(schedule, move |_uuid, _lock| job())?;
        let id = self.inner.add(job).await?;

        tracing::debug!("Scheduled job {} with cron '{}'", id, schedule);

        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AppError> {
        if !self.started.load(Ordering::SeqCst) {
            return Err(LifecycleError::SchedulerNotStarted.into());
        }

        // `shutdown` needs `&mut`; clones share the same underlying scheduler.
        let mut inner = self.inner.clone();
        inner.shutdown().await?;

        tracing::debug!("Job scheduler shut down");

        Ok(())
    }
}
