//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Builds the JSON payload Discord sends for a user.
pub(crate) fn user_json(user_id: u64, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": format!("user{}", user_id),
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "banner": null,
        "accent_color": null,
    })
}

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `bot` - Whether the user is a bot account
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, bot: bool) -> User {
    serde_json::from_value(user_json(user_id, bot))
        .expect("Failed to create test user - invalid JSON structure")
}
