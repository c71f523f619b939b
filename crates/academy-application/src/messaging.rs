//! Conversations with instructors and learners.

use academy_core::error::{AcademyError, Result};
use academy_core::messaging::{
    ConversationId, ConversationSummary, Message, MessagePage, MessagingApi, OutgoingMessage,
    UserId,
};
use std::sync::Arc;

/// An opened conversation and whom replies go to.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    /// `None` when neither the caller nor the inbox knows the other party.
    pub receiver_id: Option<UserId>,
    pub receiver_name: Option<String>,
    pub page: MessagePage,
}

pub struct MessagingUseCase {
    api: Arc<dyn MessagingApi>,
}

impl MessagingUseCase {
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }

    pub async fn inbox(&self) -> Result<Vec<ConversationSummary>> {
        self.api.inbox().await
    }

    /// Loads the first page of a conversation.
    ///
    /// Without a `receiver_hint` the receiver is looked up in the inbox.
    pub async fn open_conversation(
        &self,
        conversation_id: ConversationId,
        receiver_hint: Option<UserId>,
    ) -> Result<Conversation> {
        let page = self.api.messages(conversation_id, 1).await?;

        let (receiver_id, receiver_name) = match receiver_hint {
            Some(id) => (Some(id), None),
            None => {
                let inbox = self.api.inbox().await?;
                inbox
                    .into_iter()
                    .find(|summary| summary.conversation_id == conversation_id)
                    .map(|summary| (summary.other_user_id, summary.other_user_name))
                    .unwrap_or((None, None))
            }
        };

        if receiver_id.is_none() {
            tracing::warn!(
                "[Messaging] No receiver known for conversation {}",
                conversation_id
            );
        }

        Ok(Conversation {
            id: conversation_id,
            receiver_id,
            receiver_name,
            page,
        })
    }

    /// Loads a later page of an opened conversation.
    pub async fn page(&self, conversation_id: ConversationId, page: u32) -> Result<MessagePage> {
        self.api.messages(conversation_id, page).await
    }

    /// Sends a message. A message with neither text nor file is refused
    /// before any request is made.
    pub async fn send(&self, message: OutgoingMessage) -> Result<Message> {
        if message.is_empty() {
            return Err(AcademyError::validation("Message is empty"));
        }

        let sent = self.api.send_message(&message).await?;
        tracing::info!("[Messaging] Sent message {} to user {}", sent.id, message.receiver_id);
        Ok(sent)
    }

    /// Replies within an opened conversation.
    pub async fn reply(
        &self,
        conversation: &Conversation,
        text: impl Into<String>,
        attachment: Option<(String, Vec<u8>)>,
    ) -> Result<Message> {
        let receiver_id = conversation.receiver_id.ok_or_else(|| {
            AcademyError::validation(format!(
                "Receiver not found for conversation {}",
                conversation.id
            ))
        })?;

        let mut message = OutgoingMessage::new(receiver_id, text);
        if let Some((file_name, bytes)) = attachment {
            message = message.with_attachment(file_name, bytes);
        }
        self.send(message).await
    }
}
