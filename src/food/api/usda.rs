use crate::food::api::models::AbridgedFoodItem;
use crate::food::config::FoodConfig;
use crate::food::error::FoodError;

/// FoodData Central client. Holds no connection state: every lookup builds
/// its own HTTP client, which is dropped when the lookup ends.
#[derive(Debug, Clone)]
pub struct UsdaClient {
    config: FoodConfig,
}

impl UsdaClient {
    pub fn new(config: FoodConfig) -> Self {
        Self { config }
    }

    /// Fetch the abridged record for one FDC ID. The request URL carries the
    /// API key, so it is stripped from transport errors.
    pub async fn fetch_abridged(&self, fdc_id: &str) -> Result<AbridgedFoodItem, FoodError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FoodError::Network(e.without_url()))?;

        let url = format!("{}/food/{}", self.config.base_url, urlencoding::encode(fdc_id));

        let response = client
            .get(&url)
            .query(&[
                ("api_key", self.config.usda_api_key.as_str()),
                ("format", "abridged"),
            ])
            .send()
            .await
            .map_err(|e| FoodError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FoodError::RemoteLookupFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FoodError::Network(e.without_url()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
