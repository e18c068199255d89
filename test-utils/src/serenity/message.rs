//! Test factory for creating Serenity Message objects.
//!
//! Messages are created by deserializing JSON, the same shape the gateway
//! delivers in a `MESSAGE_CREATE` event.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message.
///
/// The message has fixed content and no attachments, embeds or mentions.
/// Passing `None` for `guild_id` produces a direct message.
///
/// # Arguments
/// - `author_id` - Discord user ID of the author (snowflake)
/// - `bot` - Whether the author is a bot account
/// - `guild_id` - Guild the message was sent in, or `None` for a DM
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(123456789, false, None);
/// assert!(message.guild_id.is_none());
/// ```
pub fn create_test_message(author_id: u64, bot: bool, guild_id: Option<u64>) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": "300000000000000000",
        "channel_id": "200000000000000000",
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(author_id, bot),
        "member": null,
        "content": "hello",
        "timestamp": "2021-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "nonce": null,
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "flags": null,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_message_has_no_guild() {
        let message = create_test_message(123456789, false, None);

        assert!(message.guild_id.is_none());
        assert_eq!(message.author.id.get(), 123456789);
        assert!(!message.author.bot);
    }

    #[test]
    fn guild_message_carries_guild_id() {
        let message = create_test_message(123456789, true, Some(111111111));

        assert_eq!(message.guild_id.map(|id| id.get()), Some(111111111));
        assert!(message.author.bot);
    }
}
