//! Cogs: plugin units registered into the bot's dispatch table.
//!
//! Each cog arrives through an [`Extension`] listed in [`extensions`]. The
//! list is explicit; nothing is discovered from the filesystem. Cogs receive
//! gateway signals from the event handler together with a [`CogContext`]
//! giving read access to shared state.

pub mod ready;
pub mod role;
pub mod starboard;

use std::sync::Arc;

use serenity::async_trait;

use crate::bot::extension::Extension;
use crate::cog::ready::ReadinessTracker;
use crate::error::extension::ExtensionError;
use crate::state::BotSession;

/// All extensions shipped with the bot.
pub fn extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(role::RoleExtension),
        Box::new(starboard::StarboardExtension),
    ]
}

/// Shared state handed to cogs with every signal.
#[derive(Clone)]
pub struct CogContext {
    pub readiness: Arc<ReadinessTracker>,
    pub session: Arc<BotSession>,
}

#[async_trait]
pub trait Cog: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called on every gateway `ready` event, including after reconnects.
    ///
    /// The default marks the cog ready the first time and ignores later calls.
    async fn on_ready(&self, ctx: &CogContext) {
        if !ctx.readiness.is_up(self.name()) {
            ctx.readiness.up(self.name());
        }
    }
}

/// Cogs registered by the loaded extensions, in load order.
#[derive(Default)]
pub struct CogSet {
    cogs: Vec<Arc<dyn Cog>>,
}

impl CogSet {
    /// Registers a cog. Names must be unique across all extensions.
    pub fn add(&mut self, cog: Arc<dyn Cog>) -> Result<(), ExtensionError> {
        if self.cogs.iter().any(|c| c.name() == cog.name()) {
            return Err(ExtensionError::DuplicateCog(cog.name().to_string()));
        }

        self.cogs.push(cog);

        Ok(())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.cogs.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.cogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cogs.is_empty()
    }

    /// Delivers a `ready` signal to every cog in load order.
    pub async fn dispatch_ready(&self, ctx: &CogContext) {
        for cog in &self.cogs {
            cog.on_ready(ctx).await;
        }
    }
}
