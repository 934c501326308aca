use crate::food::config::FoodConfig;
use crate::providers::telegram::telegram::DEFAULT_TELEGRAM_API_URL;
use std::env;
use thiserror::Error;

pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAINTAINER_CONTACT: &str = "@a1d4r";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub telegram_api_url: String,
    pub poll_timeout_secs: u64,
    pub maintainer_contact: String,
    pub food: FoodConfig,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = env::var("BOT_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("BOT_API_TOKEN"))?;

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_URL.to_string());

        let poll_timeout_secs = env::var("TELEGRAM_POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);

        let maintainer_contact = env::var("MAINTAINER_CONTACT")
            .unwrap_or_else(|_| DEFAULT_MAINTAINER_CONTACT.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            poll_timeout_secs,
            maintainer_contact,
            food: FoodConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: &[&str] = &[
        "BOT_API_TOKEN",
        "TELEGRAM_API_URL",
        "TELEGRAM_POLL_TIMEOUT_SECS",
        "MAINTAINER_CONTACT",
        "FOOD_DATA_API_KEY",
        "FDC_API_URL",
        "FDC_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    // One test so the cases never race on the shared process environment.
    #[test]
    fn test_from_env() {
        clear_env();
        assert!(matches!(BotConfig::from_env(), Err(ConfigError::Missing("BOT_API_TOKEN"))));

        env::set_var("BOT_API_TOKEN", "   ");
        assert!(matches!(BotConfig::from_env(), Err(ConfigError::Missing("BOT_API_TOKEN"))));

        env::set_var("BOT_API_TOKEN", "123:abc");
        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.poll_timeout_secs, DEFAULT_POLL_TIMEOUT_SECS);
        assert_eq!(config.maintainer_contact, DEFAULT_MAINTAINER_CONTACT);
        assert_eq!(config.food.usda_api_key, "");
        assert_eq!(config.food.base_url, "https://api.nal.usda.gov/fdc/v1");
        assert_eq!(config.food.request_timeout, None);

        env::set_var("TELEGRAM_POLL_TIMEOUT_SECS", "not a number");
        assert_eq!(BotConfig::from_env().unwrap().poll_timeout_secs, DEFAULT_POLL_TIMEOUT_SECS);

        env::set_var("TELEGRAM_POLL_TIMEOUT_SECS", "5");
        env::set_var("MAINTAINER_CONTACT", "@someone");
        env::set_var("FOOD_DATA_API_KEY", "key");
        env::set_var("FDC_API_URL", "http://localhost:8080/fdc/v1/");
        env::set_var("FDC_TIMEOUT_SECS", "15");
        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.poll_timeout_secs, 5);
        assert_eq!(config.maintainer_contact, "@someone");
        assert_eq!(config.food.usda_api_key, "key");
        assert_eq!(config.food.base_url, "http://localhost:8080/fdc/v1");
        assert_eq!(config.food.request_timeout, Some(std::time::Duration::from_secs(15)));

        clear_env();
    }
}
