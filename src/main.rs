use dotenv::dotenv;
use env_logger::Env;
use fdc_nutrition_bot::bot::run_polling;
use fdc_nutrition_bot::providers::traits::ChatTransport;
use fdc_nutrition_bot::{BotConfig, CommandHandler, TelegramClient, UsdaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = BotConfig::from_env()?;
    log::info!("Using FoodData Central at {}", config.food.base_url);

    let transport: Box<dyn ChatTransport + Send + Sync> = Box::new(TelegramClient::new(
        &config.telegram_api_url,
        &config.bot_token,
        config.poll_timeout_secs,
    )?);

    let handler = CommandHandler::new(UsdaClient::new(config.food), config.maintainer_contact);

    run_polling(handler, transport).await;
    Ok(())
}
