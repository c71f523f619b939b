//! Conversations between end users and instructors.

mod api;
mod model;

pub use api::MessagingApi;
pub use model::{
    Attachment, ConversationId, ConversationSummary, Message, MessagePage, OutgoingMessage,
    Participant, UserId,
};
