//! Cron-style job scheduling.
//!
//! The bot runs a single recurring job: committing the database once a
//! minute. `Scheduler` is the seam the lifecycle orchestrator talks to;
//! `CronScheduler` implements it on top of `tokio-cron-scheduler`.

pub mod commit;
pub mod cron;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serenity::async_trait;

use crate::error::AppError;

/// Future produced by one run of a scheduled job.
pub type JobFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Job body, invoked once per trigger.
pub type JobFn = Arc<dyn Fn() -> JobFuture + Send + Sync>;

/// Scheduler lifecycle operations used during Starting and Stopping.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Starts firing jobs. Calling this twice is an error.
    async fn start(&self) -> Result<(), AppError>;

    /// Registers a job triggered by a six-field cron expression
    /// (`sec min hour day month weekday`) evaluated in UTC.
    async fn add_cron_job(&self, schedule: &str, job: JobFn) -> Result<(), AppError>;

    /// Stops the scheduler. Jobs already running are not awaited.
    async fn shutdown(&self) -> Result<(), AppError>;
}
