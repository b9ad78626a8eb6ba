use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message};
use aws_sdk_bedrockruntime::Client as BedrockClient;
use diary_atoms::compose::TextGenerator;
use diary_atoms::error::HandlerError;

/// Text generation via the Bedrock Converse API: one user message in,
/// the first text block of the reply out.
pub struct BedrockTextGenerator {
    client: BedrockClient,
    model_id: String,
}

impl BedrockTextGenerator {
    pub fn new(client: BedrockClient, model_id: String) -> Self {
        Self { client, model_id }
    }
}

#[async_trait]
impl TextGenerator for BedrockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, HandlerError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| HandlerError::Collaborator(format!("Bedrock message error: {e}")))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| HandlerError::Collaborator(format!("Bedrock converse error: {e}")))?;

        response
            .output()
            .and_then(|output| output.as_message().ok())
            .and_then(|message| message.content().first())
            .and_then(|block| block.as_text().ok())
            .cloned()
            .ok_or_else(|| {
                HandlerError::Collaborator("Bedrock response contained no text".to_string())
            })
    }
}
