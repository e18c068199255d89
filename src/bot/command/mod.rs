//! Application and prefix commands.
//!
//! Commands are served by a `poise` framework attached to the same client as
//! the gateway event handler. Slash commands are registered in the
//! configured guilds once the first `ready` arrives, or globally when no
//! guild is configured. Text commands use the configured prefix and match
//! command names case-insensitively.

pub mod help;

use serenity::all::{Context as SerenityContext, GuildId};

use crate::cog::CogContext;
use crate::config::Config;
use crate::error::AppError;

/// Data shared with every command invocation.
pub struct CommandData {
    pub cog_ctx: CogContext,
}

pub type Context<'a> = poise::Context<'a, CommandData, AppError>;
pub type Command = poise::Command<CommandData, AppError>;

/// Every command the bot serves.
pub fn commands() -> Vec<Command> {
    vec![help::help()]
}

/// Framework options built from the configuration.
///
/// Owners come from the configuration only; the application's owner is not
/// looked up.
pub fn framework_options(config: &Config) -> poise::FrameworkOptions<CommandData, AppError> {
    poise::FrameworkOptions {
        commands: commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.prefix.clone()),
            case_insensitive_commands: true,
            ..Default::default()
        },
        owners: config.owner_ids.iter().copied().collect(),
        initialize_owners: false,
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

/// Registers the slash commands in each guild, or globally if `guild_ids`
/// is empty.
pub async fn register_commands(
    ctx: &SerenityContext,
    commands: &[Command],
    guild_ids: &[GuildId],
) -> Result<(), AppError> {
    if guild_ids.is_empty() {
        poise::builtins::register_globally(ctx, commands).await?;
        tracing::info!("Registered {} command(s) globally", commands.len());

        return Ok(());
    }

    for guild_id in guild_ids {
        poise::builtins::register_in_guild(ctx, commands, *guild_id).await?;
        tracing::info!(
            "Registered {} command(s) in guild {}",
            commands.len(),
            guild_id
        );
    }

    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, CommandData, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Command '{}' failed: {}", ctx.command().name, error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Failed to report command error: {}", e);
            }
        }
    }
}
