use std::sync::Arc;

use serenity::all::{ActivityData, Client, GatewayIntents};

use crate::bot::command::{self, CommandData};
use crate::bot::handler::Handler;
use crate::bot::lifecycle::LifecycleHandle;
use crate::bot::VERSION;
use crate::cog::ready::ReadinessTracker;
use crate::cog::{CogContext, CogSet};
use crate::config::Config;
use crate::error::AppError;
use crate::state::BotSession;

/// Status shown under the bot's name.
pub fn activity() -> ActivityData {
    ActivityData::watching(format!("/help • Version {}", VERSION))
}

/// Builds the Discord client without connecting it.
///
/// The handler receives the loaded cogs, a readiness tracker expecting each
/// of them, and the lifecycle handle used to report the Started phase. The
/// command framework is attached to the same client and registers its slash
/// commands once connected.
///
/// # Arguments
/// - `config` - Application configuration
/// - `cogs` - Cogs registered by the loaded extensions
/// - `session` - Shared resources, readable by cogs
/// - `lifecycle` - Handle to the lifecycle actor
///
/// # Returns
/// - `Ok(Client)` - Client ready to `start`
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    cogs: CogSet,
    session: Arc<BotSession>,
    lifecycle: LifecycleHandle,
) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is privileged and must be enabled for prefix commands.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let cog_ctx = CogContext {
        readiness: Arc::new(ReadinessTracker::new(cogs.names())),
        session,
    };
    let command_data = CommandData {
        cog_ctx: cog_ctx.clone(),
    };
    let handler = Handler::new(cogs, cog_ctx, lifecycle, config.modmail_user_id);

    let guild_ids = config.guild_ids.clone();
    let framework = poise::Framework::builder()
        .options(command::framework_options(config))
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                command::register_commands(ctx, &framework.options().commands, &guild_ids)
                    .await?;

                Ok(command_data)
            })
        })
        .build();

    let client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(handler)
        .activity(activity())
        .await?;

    Ok(client)
}
