//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from every
//! fallible collaborator call. Domain-specific failures live in their own
//! enums (`ConfigError`, `LifecycleError`, `ExtensionError`) and convert into
//! `AppError` through `#[from]`.

pub mod config;
pub mod extension;
pub mod lifecycle;

use thiserror::Error;

use crate::error::{config::ConfigError, extension::ExtensionError, lifecycle::LifecycleError};

/// Top-level application error type.
///
/// Aggregates all errors that can occur while starting, running or stopping
/// the bot. Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A lifecycle event arrived in a phase that cannot handle it, or a
    /// managed resource was used in the wrong state.
    #[error(transparent)]
    LifecycleErr(#[from] LifecycleError),

    /// An extension failed to load.
    #[error(transparent)]
    ExtensionErr(#[from] ExtensionError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLite connection pool error from sqlx.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::sqlx::Error),

    /// Filesystem error while preparing the data directories.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
