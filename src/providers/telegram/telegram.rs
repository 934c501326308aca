use crate::providers::traits::{ChatTransport, IncomingMessage, MessageBatch};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    message_id: i64,
    chat: Chat,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

impl Update {
    fn into_incoming(self) -> Option<IncomingMessage> {
        let message = self.message?;
        Some(IncomingMessage {
            chat_id: message.chat.id,
            message_id: message.message_id,
            text: message.text?,
        })
    }
}

/// Telegram Bot API over long polling. The bot token is part of every
/// request URL, so URLs are stripped from errors before they are returned.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    bot_url: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    pub fn new(api_url: &str, bot_token: &str, poll_timeout_secs: u64) -> Result<Self> {
        // The HTTP timeout has to outlast a long poll.
        let client = Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + 10))
            .build()?;

        Ok(Self {
            client,
            bot_url: format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token),
            poll_timeout_secs,
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> Result<T> {
        let response = self.client
            .post(format!("{}/{}", self.bot_url, method))
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send {} request: {}", method, e.without_url()))?;

        let status = response.status();
        let api_response: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse {} response (status {}): {}", method, status, e.without_url()))?;

        if !api_response.ok {
            return Err(anyhow!(
                "Telegram API error on {}: Status {}, {}",
                method,
                status,
                api_response.description.unwrap_or_default()
            ));
        }

        api_response
            .result
            .ok_or_else(|| anyhow!("Telegram API returned no result for {}", method))
    }

    async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<Vec<Update>> {
        let mut body = json!({
            "timeout": timeout_secs,
            "allowed_updates": ["message"],
        });
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }
        self.call("getUpdates", body).await
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn skip_pending(&self) -> Result<Option<i64>> {
        // offset -1 returns only the newest update and confirms all older ones
        let updates = self.get_updates(Some(-1), 0).await?;
        Ok(updates.iter().map(|u| u.update_id + 1).max())
    }

    async fn poll(&self, offset: Option<i64>) -> Result<MessageBatch> {
        let updates = self.get_updates(offset, self.poll_timeout_secs).await?;
        let next_offset = updates.iter().map(|u| u.update_id + 1).max().or(offset);

        Ok(MessageBatch {
            messages: updates.into_iter().filter_map(Update::into_incoming).collect(),
            next_offset,
        })
    }

    async fn send_message(&self, chat_id: i64, text: &str, reply_to_message_id: Option<i64>) -> Result<()> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(message_id) = reply_to_message_id {
            body["reply_to_message_id"] = json!(message_id);
            body["allow_sending_without_reply"] = json!(true);
        }
        self.call::<Value>("sendMessage", body).await?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn ChatTransport + Send + Sync> {
        Box::new(self.clone())
    }
}
