pub mod telegram;
pub mod traits;

pub use telegram::TelegramClient;
pub use traits::{ChatTransport, IncomingMessage, MessageBatch};
