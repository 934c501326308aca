use thiserror::Error;

/// Everything that can end a single nutrient lookup.
#[derive(Error, Debug)]
pub enum FoodError {
    #[error("Invalid format. Should be: `fdc_id grams`. For example: `167725 200`")]
    MalformedInput,
    #[error("Got response with status code {status}. Make sure you entered correct FDC ID.")]
    RemoteLookupFailed { status: u16 },
    #[error("Failed to parse food record: {0}")]
    ResponseParse(#[from] serde_json::Error),
    #[error("Request to FoodData Central failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl FoodError {
    /// True for failures the user can fix by resending a corrected message.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FoodError::MalformedInput | FoodError::RemoteLookupFailed { .. })
    }

    /// Plain-text reply for the chat. Anything not caused by the user's input
    /// points them at the maintainer.
    pub fn reply_text(&self, maintainer_contact: &str) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            format!(
                "Got unexpected error: {}. \nContact the developer: {}",
                self, maintainer_contact
            )
        }
    }
}
