use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready, UserId};
use serenity::async_trait;

use crate::bot::lifecycle::LifecycleHandle;
use crate::cog::{CogContext, CogSet};

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub cogs: Arc<CogSet>,
    pub cog_ctx: CogContext,
    pub lifecycle: LifecycleHandle,
    pub modmail_user_id: UserId,
    /// Latched by the first `ready` so Started is signalled once per process.
    pub started: AtomicBool,
}

impl Handler {
    pub fn new(
        cogs: CogSet,
        cog_ctx: CogContext,
        lifecycle: LifecycleHandle,
        modmail_user_id: UserId,
    ) -> Self {
        Self {
            cogs: Arc::new(cogs),
            cog_ctx,
            lifecycle,
            modmail_user_id,
            started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a message is sent in a channel the bot can see, including DMs
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.modmail_user_id, ctx, message).await;
    }
}
