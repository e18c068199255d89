//! Status channel announcements.
//!
//! The bot posts exactly two automated messages to the configured status
//! channel: one once the gateway connection is established and one while
//! shutting down.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

/// Posts plain text to the status channel.
#[async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(&self, content: &str) -> Result<(), AppError>;
}

/// Message sent once the bot is online.
pub fn online_message(version: &str) -> String {
    format!("Carberretta is now online! (Version {})", version)
}

/// Message sent while the bot is stopping.
pub fn offline_message(version: &str) -> String {
    format!("Carberretta is shutting down. (Version {})", version)
}

/// `Announcer` posting through the Discord REST API.
pub struct ChannelAnnouncer {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelAnnouncer {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl Announcer for ChannelAnnouncer {
    async fn announce(&self, content: &str) -> Result<(), AppError> {
        let message = CreateMessage::new().content(content);

        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_version() {
        assert_eq!(
            online_message("1.2.3"),
            "Carberretta is now online! (Version 1.2.3)"
        );
        assert_eq!(
            offline_message("1.2.3"),
            "Carberretta is shutting down. (Version 1.2.3)"
        );
    }
}
