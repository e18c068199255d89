use serenity::all::{Context, CreateMessage, Message, UserId};

/// Builds the reply for a direct message, if one is owed.
///
/// Only direct messages from human users are answered; they are pointed at
/// the modmail account instead.
pub fn dm_redirect_reply(message: &Message, modmail_user_id: UserId) -> Option<String> {
    if message.guild_id.is_some() || message.author.bot {
        return None;
    }

    Some(format!(
        "You need to DM <@{}> to send a message to moderators.",
        modmail_user_id
    ))
}

/// Handle message creation in a channel
pub async fn handle_message(modmail_user_id: UserId, ctx: Context, message: Message) {
    let Some(reply) = dm_redirect_reply(&message, modmail_user_id) else {
        return;
    };

    let response = CreateMessage::new().content(reply);

    if let Err(e) = message.channel_id.send_message(&ctx.http, response).await {
        tracing::error!(
            "Failed to send DM redirect to user {}: {}",
            message.author.id,
            e
        );
    }
}
