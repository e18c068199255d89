use std::fmt;
use std::sync::Arc;

use crate::bot::lifecycle::resources::ResourceFactory;
use crate::error::{lifecycle::LifecycleError, AppError};
use crate::scheduler::commit::{commit_job, COMMIT_SCHEDULE};
use crate::service::announcement::{offline_message, online_message, Announcer};
use crate::state::BotSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Initializing,
    Starting,
    Running,
    Stopping,
    Stopped,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
        }
    }
}

/// One step of the Stopping sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeardownStep {
    Database,
    HttpSession,
    Scheduler,
    Announcement,
}

impl fmt::Display for TeardownStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Database => "database close",
            Self::HttpSession => "HTTP session close",
            Self::Scheduler => "scheduler shutdown",
            Self::Announcement => "shutdown announcement",
        };

        f.write_str(name)
    }
}

/// Outcome of the Stopping sequence.
///
/// Every step is attempted; this lists the ones that failed, in order.
#[derive(Debug, Default)]
pub struct ShutdownReport {
    pub failures: Vec<(TeardownStep, AppError)>,
}

impl ShutdownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_steps(&self) -> Vec<TeardownStep> {
        self.failures.iter().map(|(step, _)| *step).collect()
    }

    fn record(&mut self, step: TeardownStep, result: Result<(), AppError>) {
        if let Err(e) = result {
            tracing::error!("Shutdown step '{}' failed: {}", step, e);
            self.failures.push((step, e));
        }
    }
}

/// Sequences acquisition and release of the bot's shared resources.
///
/// Only the lifecycle actor drives this; see [`super::LifecycleHandle`].
pub struct Lifecycle {
    resources: Box<dyn ResourceFactory>,
    announcer: Arc<dyn Announcer>,
    session: Arc<BotSession>,
    version: String,
    phase: LifecyclePhase,
}

impl Lifecycle {
    pub fn new<R>(
        resources: R,
        announcer: Arc<dyn Announcer>,
        session: Arc<BotSession>,
        version: impl Into<String>,
    ) -> Self
    where
        R: ResourceFactory + 'static,
    {
        Self {
            resources: Box::new(resources),
            announcer,
            session,
            version: version.into(),
            phase: LifecyclePhase::Initializing,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Brings up the scheduler, HTTP session and database, then schedules
    /// the periodic commit.
    ///
    /// Each resource is stored in the session as soon as it is acquired so a
    /// later Stopping can release whatever a failed start left behind. No
    /// recovery is attempted here.
    ///
    /// # Returns
    /// - `Ok(())` - All resources acquired and the commit job registered
    /// - `Err(AppError::LifecycleErr)` - Called outside the Initializing phase
    /// - `Err(AppError)` - A resource could not be acquired
    pub async fn on_starting(&mut self) -> Result<(), AppError> {
        if self.phase != LifecyclePhase::Initializing {
            return Err(LifecycleError::InvalidTransition {
                from: self.phase.as_str(),
                event: "starting",
            }
            .into());
        }
        self.phase = LifecyclePhase::Starting;

        let scheduler = self.resources.scheduler().await?;
        scheduler.start().await?;
        self.session.set_scheduler(scheduler.clone()).await;

        let http_session = self.resources.http_session()?;
        self.session.set_http_session(http_session).await;
        tracing::info!("HTTP session started");

        let database = self.resources.database(&self.session.paths);
        database.connect().await?;
        self.session.set_database(database.clone()).await;

        scheduler
            .add_cron_job(COMMIT_SCHEDULE, commit_job(database))
            .await?;

        tracing::info!("Lifecycle resources started");

        Ok(())
    }

    /// Announces that the bot is online.
    ///
    /// Only acts once, directly after a successful Starting phase. A failed
    /// announcement is logged; the bot keeps running.
    pub async fn on_started(&mut self) {
        if self.phase != LifecyclePhase::Starting {
            tracing::warn!("Ignoring started event while {}", self.phase.as_str());
            return;
        }
        self.phase = LifecyclePhase::Running;

        if let Err(e) = self.announcer.announce(&online_message(&self.version)).await {
            tracing::error!("Failed to send online announcement: {}", e);
        }
    }

    /// Releases resources in reverse order of acquisition and announces the
    /// shutdown.
    ///
    /// Every step runs regardless of earlier failures. Resources that were
    /// never acquired are skipped with a warning. Calling this again after
    /// it has run is a no-op.
    pub async fn on_stopping(&mut self) -> ShutdownReport {
        let mut report = ShutdownReport::default();

        if matches!(
            self.phase,
            LifecyclePhase::Stopping | LifecyclePhase::Stopped
        ) {
            tracing::debug!("Ignoring stopping event while {}", self.phase.as_str());
            return report;
        }
        self.phase = LifecyclePhase::Stopping;

        match self.session.take_database().await {
            Some(database) => report.record(TeardownStep::Database, database.close().await),
            None => tracing::warn!("Database was never connected; skipping close"),
        }

        match self.session.take_http_session().await {
            Some(http_session) => {
                let result = http_session.close().await;
                if result.is_ok() {
                    tracing::info!("HTTP session closed");
                }
                report.record(TeardownStep::HttpSession, result);
            }
            None => tracing::warn!("HTTP session was never opened; skipping close"),
        }

        match self.session.take_scheduler().await {
            Some(scheduler) => report.record(TeardownStep::Scheduler, scheduler.shutdown().await),
            None => tracing::warn!("Job scheduler was never started; skipping shutdown"),
        }

        report.record(
            TeardownStep::Announcement,
            self.announcer.announce(&offline_message(&self.version)).await,
        );

        self.phase = LifecyclePhase::Stopped;

        report
    }
}
