use crate::server::error::{config::ConfigError, AppError};

/// Starter quests offered to new members when `STARTER_QUEST_IDS` is unset.
const DEFAULT_STARTER_QUEST_IDS: [&str; 5] =
    ["starter1", "starter2", "starter3", "starter4", "starter5"];

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Candidate starter quests, in the order they are offered.
    pub starter_quest_ids: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            starter_quest_ids: std::env::var("STARTER_QUEST_IDS")
                .map(|raw| parse_quest_id_list(&raw))
                .unwrap_or_else(|_| default_starter_quest_ids()),
        })
    }
}

/// Default candidate list of starter quest ids.
pub fn default_starter_quest_ids() -> Vec<String> {
    DEFAULT_STARTER_QUEST_IDS
        .iter()
        .map(|id| id.to_string())
        .collect()
}

/// Splits a comma-separated id list, dropping blanks.
fn parse_quest_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
