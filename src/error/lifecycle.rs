use thiserror::Error;

/// Misuse of the bot lifecycle or of a lifecycle-managed resource.
///
/// These indicate programming errors rather than transient failures and are
/// never retried.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// A lifecycle event arrived in a phase that does not accept it.
    #[error("Cannot handle {event} event while {from}")]
    InvalidTransition {
        /// Phase the orchestrator was in
        from: &'static str,
        /// Event that was rejected
        event: &'static str,
    },

    /// `start` was called on a scheduler that is already running.
    #[error("Job scheduler has already been started")]
    SchedulerAlreadyStarted,

    /// A job was added to, or shutdown requested from, a scheduler that was never started.
    #[error("Job scheduler has not been started")]
    SchedulerNotStarted,

    /// The database was used before `connect` or after `close`.
    #[error("Database is not connected")]
    DatabaseNotConnected,

    /// The HTTP session was used after it was closed.
    #[error("HTTP session is closed")]
    SessionClosed,

    /// The lifecycle actor is no longer running.
    #[error("Lifecycle task has stopped")]
    ActorGone,
}
