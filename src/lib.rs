//! Carberretta, a Discord community bot.
//!
//! The bot itself is a thin shell around the Discord gateway client: it
//! loads a fixed set of extensions, sequences the startup and shutdown of
//! the resources they share, and answers direct messages with a pointer to
//! the modmail account.
//!
//! # Layout
//!
//! - **Bot** (`bot/`) - Client construction, gateway event handlers,
//!   commands, extension loading and the lifecycle orchestrator
//! - **Cogs** (`cog/`) - Plugin units and the readiness tracker
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Data** (`data/`) - SQLite database handle
//! - **Error** (`error/`) - Error types
//! - **Scheduler** (`scheduler/`) - Cron jobs (periodic database commit)
//! - **Service** (`service/`) - HTTP session and status announcements
//! - **State** (`state`) - Resources shared between the orchestrator and cogs
//! - **Startup** (`startup`) - Logging setup and the run loop

pub mod bot;
pub mod cog;
pub mod config;
pub mod data;
pub mod error;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
