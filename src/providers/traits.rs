use anyhow::Result;
use async_trait::async_trait;

/// A text message received from the chat.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
}

/// Result of one poll. `next_offset` advances past every update seen,
/// including ones that carried no text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBatch {
    pub messages: Vec<IncomingMessage>,
    pub next_offset: Option<i64>,
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Drop everything queued before startup. Returns the offset to poll from.
    async fn skip_pending(&self) -> Result<Option<i64>>;

    /// Wait for new text messages with `update_id >= offset`.
    async fn poll(&self, offset: Option<i64>) -> Result<MessageBatch>;

    async fn send_message(&self, chat_id: i64, text: &str, reply_to_message_id: Option<i64>) -> Result<()>;

    fn clone_box(&self) -> Box<dyn ChatTransport + Send + Sync>;
}

impl Clone for Box<dyn ChatTransport + Send + Sync> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
