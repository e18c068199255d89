//! Discord bot integration.
//!
//! This module wires the gateway client to the rest of the bot. Extensions
//! are loaded before the client is built, the client's event handler forwards
//! gateway events to the cogs and to the lifecycle orchestrator, and the
//! orchestrator owns the shared resources for the lifetime of the process.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability
//! - `GUILD_MESSAGES` - Messages in guilds
//! - `DIRECT_MESSAGES` - Direct messages, answered with the modmail redirect
//! - `MESSAGE_CONTENT` - Prefix commands (privileged; enable it in the
//!   developer portal)

pub mod command;
pub mod extension;
pub mod handler;
pub mod lifecycle;
pub mod start;

/// Version announced in the status channel and the bot's activity.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
