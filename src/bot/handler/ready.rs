//! Ready event handler.
//!
//! Discord sends `ready` after every successful identify, so a process that
//! reconnects sees it more than once. The first one completes the lifecycle's
//! Started phase; every one is forwarded to the cogs, whose readiness flags
//! ignore repeats.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, Ready};

use crate::bot::handler::Handler;
use crate::bot::lifecycle::LifecycleHandle;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `handler` - Event handler holding the cogs and lifecycle handle
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(handler: &Handler, _ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    signal_started_once(&handler.started, &handler.lifecycle);

    handler.cogs.dispatch_ready(&handler.cog_ctx).await;
}

/// Sends the Started event the first time it is called.
///
/// Returns whether the event was sent.
pub(crate) fn signal_started_once(started: &AtomicBool, lifecycle: &LifecycleHandle) -> bool {
    if started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Reconnected; lifecycle already started");
        return false;
    }

    lifecycle.started();

    true
}
