pub mod bot;
pub mod commands;
pub mod config;
pub mod food;
pub mod providers;

// Re-export commonly used items
pub use commands::CommandHandler;
pub use config::BotConfig;
pub use food::analysis::{calculate_food_nutrients, format_report, NutrientSummary};
pub use food::api::UsdaClient;
pub use food::FoodError;
pub use providers::TelegramClient;
