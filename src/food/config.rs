use std::env;
use std::time::Duration;

pub const DEFAULT_FDC_API_URL: &str = "https://api.nal.usda.gov/fdc/v1";

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub usda_api_key: String,
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

impl FoodConfig {
    /// A missing `FOOD_DATA_API_KEY` is not fatal: the remote service rejects
    /// the request and the user sees the status code.
    pub fn from_env() -> Self {
        let usda_api_key = env::var("FOOD_DATA_API_KEY").unwrap_or_else(|_| {
            log::warn!("FOOD_DATA_API_KEY environment variable not set, lookups will be rejected");
            String::new()
        });

        let base_url = env::var("FDC_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_FDC_API_URL.to_string());

        let request_timeout = env::var("FDC_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            usda_api_key,
            base_url,
            request_timeout,
        }
    }

    pub fn new(usda_api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            usda_api_key: usda_api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }
}
