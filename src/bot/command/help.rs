use crate::bot::command::Context;
use crate::bot::VERSION;
use crate::error::AppError;

/// Show the list of commands, or details for one command
#[poise::command(prefix_command, slash_command, category = "Meta")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to show details for"] command: Option<String>,
) -> Result<(), AppError> {
    let footer = format!("Carberretta • Version {}", VERSION);
    let config = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: &footer,
        ephemeral: true,
        ..Default::default()
    };

    poise::builtins::help(ctx, command.as_deref(), config).await?;

    Ok(())
}
