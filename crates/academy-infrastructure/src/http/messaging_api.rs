//! `MessagingApi` over HTTP.

use super::client::ApiClient;
use super::envelope::{DataEnvelope, ListEnvelope};
use academy_core::auth::AuthScope;
use academy_core::error::Result;
use academy_core::messaging::{
    ConversationId, ConversationSummary, Message, MessagePage, MessagingApi, OutgoingMessage,
};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

fn messages_path(conversation_id: ConversationId) -> String {
    format!("/user/getMessages/{}", conversation_id)
}

/// Multipart body of `POST /user/sendMessage`.
fn message_form(message: &OutgoingMessage) -> Form {
    let form = Form::new()
        .text("receiver_id", message.receiver_id.to_string())
        .text("message", message.message.clone());

    match &message.attachment {
        Some(attachment) => form.part(
            "attachment",
            Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone()),
        ),
        None => form,
    }
}

#[async_trait::async_trait]
impl MessagingApi for ApiClient {
    async fn inbox(&self) -> Result<Vec<ConversationSummary>> {
        let request = self.request(Method::GET, "/user/getInbox", AuthScope::EndUser);
        let envelope: ListEnvelope<ConversationSummary> = self.send_json(request).await?;
        Ok(envelope.into_items())
    }

    async fn messages(&self, conversation_id: ConversationId, page: u32) -> Result<MessagePage> {
        let request = self
            .request(Method::GET, &messages_path(conversation_id), AuthScope::EndUser)
            .query(&[("page", page)]);
        let envelope: DataEnvelope<MessagePage> = self.send_json(request).await?;
        Ok(envelope.data)
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<Message> {
        tracing::debug!(
            "[ApiClient] Sending message to user {} (attachment: {})",
            message.receiver_id,
            message.attachment.is_some()
        );
        let request = self
            .request(Method::POST, "/user/sendMessage", AuthScope::EndUser)
            .multipart(message_form(message));
        let envelope: DataEnvelope<Message> = self.send_json(request).await?;
        Ok(envelope.data)
    }
}
