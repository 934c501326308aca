use crate::food::api::usda::UsdaClient;
use std::sync::Arc;

pub mod food_cmd;
pub mod system;

pub use food_cmd::{parse_food_query, FoodQuery};

/// Reply to one incoming message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Thread the reply under the user's message instead of posting it plainly.
    pub quote_original: bool,
}

/// Routes chat messages. Cheap to clone; every clone shares the same
/// read-only client configuration.
#[derive(Clone)]
pub struct CommandHandler {
    usda_client: Arc<UsdaClient>,
    maintainer_contact: Arc<str>,
}

impl CommandHandler {
    pub fn new(usda_client: UsdaClient, maintainer_contact: impl Into<String>) -> Self {
        Self {
            usda_client: Arc::new(usda_client),
            maintainer_contact: Arc::from(maintainer_contact.into()),
        }
    }

    /// Every input produces exactly one reply; failures become reply text.
    pub async fn handle_message(&self, input: &str) -> Reply {
        let input = input.trim();

        if let Some(command) = parse_command(input) {
            if let Some(usage) = system::handle_command(command) {
                return Reply {
                    text: usage.to_string(),
                    quote_original: true,
                };
            }
        }

        Reply {
            text: food_cmd::handle_command(input, &self.usda_client, &self.maintainer_contact).await,
            quote_original: false,
        }
    }
}

/// `/help` and `/help@SomeBot` both yield `help`.
fn parse_command(input: &str) -> Option<&str> {
    let first = input.split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    command.split('@').next().filter(|c| !c.is_empty())
}
