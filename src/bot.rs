use crate::commands::CommandHandler;
use crate::providers::traits::{ChatTransport, IncomingMessage};
use std::time::Duration;
use tokio::task::JoinHandle;

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Answer one message. Runs in its own task; a failed send is logged and
/// dropped.
pub async fn answer_message(
    handler: CommandHandler,
    transport: Box<dyn ChatTransport + Send + Sync>,
    message: IncomingMessage,
) {
    let reply = handler.handle_message(&message.text).await;
    let reply_to = reply.quote_original.then_some(message.message_id);

    if let Err(e) = transport.send_message(message.chat_id, &reply.text, reply_to).await {
        log::error!("Failed to reply in chat {}: {}", message.chat_id, e);
    }
}

/// Spawn one task per message so a slow lookup never holds up the others.
pub fn dispatch(
    handler: &CommandHandler,
    transport: &Box<dyn ChatTransport + Send + Sync>,
    messages: Vec<IncomingMessage>,
) -> Vec<JoinHandle<()>> {
    messages
        .into_iter()
        .map(|message| tokio::spawn(answer_message(handler.clone(), transport.clone(), message)))
        .collect()
}

/// Long-poll forever. Transport failures are logged and retried after a
/// short pause; nothing here returns an error.
pub async fn run_polling(handler: CommandHandler, transport: Box<dyn ChatTransport + Send + Sync>) {
    let mut offset = match transport.skip_pending().await {
        Ok(offset) => offset,
        Err(e) => {
            log::warn!("Could not skip pending updates: {}", e);
            None
        }
    };

    log::info!("Polling for messages");
    loop {
        match transport.poll(offset).await {
            Ok(batch) => {
                offset = batch.next_offset.or(offset);
                dispatch(&handler, &transport, batch.messages);
            }
            Err(e) => {
                log::error!("Polling failed: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
