//! Messaging API trait.

use super::model::{ConversationId, ConversationSummary, Message, MessagePage, OutgoingMessage};
use crate::error::Result;

/// Remote messaging endpoints, authorized with the end-user credential.
#[async_trait::async_trait]
pub trait MessagingApi: Send + Sync {
    /// Latest conversations (`GET /user/getInbox`). Missing `data` is empty.
    async fn inbox(&self) -> Result<Vec<ConversationSummary>>;

    /// One page of a conversation (`GET /user/getMessages/{id}?page=n`).
    async fn messages(&self, conversation_id: ConversationId, page: u32) -> Result<MessagePage>;

    /// Sends a message (`POST /user/sendMessage`) and returns the stored copy.
    async fn send_message(&self, message: &OutgoingMessage) -> Result<Message>;
}
