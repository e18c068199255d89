//! Bot lifecycle orchestration.
//!
//! The gateway client reports three lifecycle signals: Starting (before the
//! connection is made), Started (the connection is established) and
//! Stopping (shutdown was requested). [`Lifecycle`] reacts to each by
//! acquiring or releasing the shared resources in [`BotSession`].
//!
//! Signals may come from several tasks (the startup routine, the event
//! handler, the signal listener), so the orchestrator runs as a single actor
//! task and handles one event at a time. Callers talk to it through a
//! cloneable [`LifecycleHandle`].
//!
//! [`BotSession`]: crate::state::BotSession

pub mod orchestrator;
pub mod resources;

#[cfg(test)]
pub(crate) mod test;

use tokio::sync::{mpsc, oneshot};

pub use orchestrator::{Lifecycle, LifecyclePhase, ShutdownReport, TeardownStep};
pub use resources::{ProductionResources, ResourceFactory};

use crate::error::{lifecycle::LifecycleError, AppError};

pub enum LifecycleEvent {
    Starting(oneshot::Sender<Result<(), AppError>>),
    Started,
    Stopping(oneshot::Sender<ShutdownReport>),
}

/// Sends lifecycle events to the actor spawned with [`Lifecycle::run`].
#[derive(Clone)]
pub struct LifecycleHandle {
    tx: mpsc::UnboundedSender<LifecycleEvent>,
}

impl LifecycleHandle {
    /// Creates a handle and the receiver to pass to [`Lifecycle::run`].
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LifecycleEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (Self { tx }, rx)
    }

    /// Runs the Starting phase and waits for its outcome.
    pub async fn starting(&self) -> Result<(), AppError> {
        let (reply, outcome) = oneshot::channel();

        self.tx
            .send(LifecycleEvent::Starting(reply))
            .map_err(|_| LifecycleError::ActorGone)?;

        outcome.await.map_err(|_| LifecycleError::ActorGone)?
    }

    /// Queues the Started phase without waiting for it.
    pub fn started(&self) {
        if self.tx.send(LifecycleEvent::Started).is_err() {
            tracing::warn!("Lifecycle task has stopped; dropping started event");
        }
    }

    /// Runs the Stopping phase and waits for it to finish.
    pub async fn stopping(&self) -> Result<ShutdownReport, AppError> {
        let (reply, outcome) = oneshot::channel();

        self.tx
            .send(LifecycleEvent::Stopping(reply))
            .map_err(|_| LifecycleError::ActorGone)?;

        Ok(outcome.await.map_err(|_| LifecycleError::ActorGone)?)
    }
}

impl Lifecycle {
    /// Handles events until every [`LifecycleHandle`] has been dropped.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<LifecycleEvent>) {
        while let Some(event) = events.recv().await {
            match event {
                LifecycleEvent::Starting(reply) => {
                    let result = self.on_starting().await;
                    let _ = reply.send(result);
                }
                LifecycleEvent::Started => self.on_started().await,
                LifecycleEvent::Stopping(reply) => {
                    let report = self.on_stopping().await;
                    let _ = reply.send(report);
                }
            }
        }

        tracing::debug!("Lifecycle task finished in phase {}", self.phase().as_str());
    }
}
