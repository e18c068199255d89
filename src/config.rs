use std::path::PathBuf;

use serenity::all::{ChannelId, GuildId, UserId};

use crate::error::{config::ConfigError, AppError};

/// Account members are redirected to when they DM the bot.
const DEFAULT_MODMAIL_USER_ID: u64 = 795985066530439229;
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PREFIX: &str = "+";

pub struct Config {
    pub discord_bot_token: String,

    /// Prefix for text commands, matched case-insensitively.
    pub prefix: String,
    /// Guilds application commands are registered in. Empty registers
    /// them globally.
    pub guild_ids: Vec<GuildId>,
    /// Accounts allowed to run owner-only commands.
    pub owner_ids: Vec<UserId>,

    /// Channel receiving the online/offline announcements.
    pub stdout_channel_id: ChannelId,
    pub modmail_user_id: UserId,

    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    ///
    /// `GUILD_ID` and `OWNER_IDS` accept a comma-separated list of ids.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let id_list = |name: &str| match lookup(name) {
            Some(value) => parse_id_list(name, &value),
            None => Ok(Vec::new()),
        };

        let stdout_channel_id = parse_id("STDOUT_CHANNEL_ID", &required("STDOUT_CHANNEL_ID")?)?;
        let modmail_user_id = match lookup("MODMAIL_USER_ID") {
            Some(value) => parse_id("MODMAIL_USER_ID", &value)?,
            None => DEFAULT_MODMAIL_USER_ID,
        };

        let prefix = match lookup("PREFIX") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "PREFIX".to_string(),
                    value,
                }
                .into())
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_PREFIX.to_string(),
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            prefix,
            guild_ids: id_list("GUILD_ID")?.into_iter().map(GuildId::new).collect(),
            owner_ids: id_list("OWNER_IDS")?.into_iter().map(UserId::new).collect(),
            stdout_channel_id: ChannelId::new(stdout_channel_id),
            modmail_user_id: UserId::new(modmail_user_id),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }
}

/// Parses a non-zero Discord snowflake.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

/// Parses a comma-separated list of snowflakes. Blank entries are skipped.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            parse_id(name, part).map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "626608699942764548"),
        ]))
        .unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.stdout_channel_id.get(), 626608699942764548);
        assert_eq!(config.modmail_user_id.get(), DEFAULT_MODMAIL_USER_ID);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.prefix, "+");
        assert!(config.guild_ids.is_empty());
        assert!(config.owner_ids.is_empty());
    }

    #[test]
    fn overrides_optional_values() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "1"),
            ("MODMAIL_USER_ID", "42"),
            ("DATA_DIR", "/var/lib/carberretta"),
        ]))
        .unwrap();

        assert_eq!(config.modmail_user_id.get(), 42);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/carberretta"));
    }

    #[test]
    fn missing_token_is_reported_by_name() {
        let result = Config::from_lookup(lookup(&[("STDOUT_CHANNEL_ID", "1")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn rejects_malformed_channel_id() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "general"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "STDOUT_CHANNEL_ID"
        ));
    }

    #[test]
    fn rejects_zero_ids() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "0"),
        ]));

        assert!(result.is_err());
    }

    /// Tests the command settings: prefix, guilds and owners.
    ///
    /// Expected: Ok with trimmed prefix and every listed id parsed in order
    #[test]
    fn reads_command_settings() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "1"),
            ("PREFIX", " c! "),
            ("GUILD_ID", "626608699942764544"),
            ("OWNER_IDS", "385807530913169426, 102733689121468416,"),
        ]))
        .unwrap();

        assert_eq!(config.prefix, "c!");
        assert_eq!(config.guild_ids, vec![GuildId::new(626608699942764544)]);
        assert_eq!(
            config.owner_ids,
            vec![
                UserId::new(385807530913169426),
                UserId::new(102733689121468416)
            ]
        );
    }

    /// Tests that one bad entry rejects the whole id list.
    ///
    /// Expected: Err(InvalidEnvVar) naming OWNER_IDS with the raw value
    #[test]
    fn rejects_malformed_owner_list() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "1"),
            ("OWNER_IDS", "385807530913169426,me"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, ref value }))
                if name == "OWNER_IDS" && value == "385807530913169426,me"
        ));
    }

    /// Tests that a blank prefix is refused.
    ///
    /// Expected: Err(InvalidEnvVar) naming PREFIX
    #[test]
    fn rejects_blank_prefix() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("STDOUT_CHANNEL_ID", "1"),
            ("PREFIX", "  "),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "PREFIX"
        ));
    }
}
