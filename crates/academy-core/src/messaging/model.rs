//! Messaging models.

use serde::{Deserialize, Serialize};

pub type ConversationId = u64;
pub type UserId = u64;

/// Inbox row: the latest state of one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: ConversationId,
    #[serde(default)]
    pub other_user_id: Option<UserId>,
    #[serde(default)]
    pub other_user_name: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    #[serde(default)]
    pub sender_id: Option<UserId>,
    #[serde(default)]
    pub receiver_id: Option<UserId>,
    #[serde(default)]
    pub message: Option<String>,
    /// Server-relative path of an uploaded file.
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sender: Option<Participant>,
}

impl Message {
    /// Display name of the sender, falling back to `User #<id>`.
    pub fn sender_name(&self) -> String {
        match (&self.sender, self.sender_id) {
            (Some(sender), _) if !sender.name.is_empty() => sender.name.clone(),
            (_, Some(id)) => format!("User #{}", id),
            _ => "Unknown".to_string(),
        }
    }
}

/// One page of a conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessagePage {
    #[serde(default)]
    pub data: Vec<Message>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
}

impl MessagePage {
    pub fn has_more(&self) -> bool {
        matches!((self.current_page, self.last_page), (Some(current), Some(last)) if current < last)
    }
}

/// File sent along with a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Message to be sent, posted as a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub receiver_id: UserId,
    pub message: String,
    pub attachment: Option<Attachment>,
}

impl OutgoingMessage {
    pub fn new(receiver_id: UserId, message: impl Into<String>) -> Self {
        Self {
            receiver_id,
            message: message.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.attachment = Some(Attachment {
            file_name: file_name.into(),
            bytes,
        });
        self
    }

    /// Neither text nor a file.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty() && self.attachment.is_none()
    }
}
