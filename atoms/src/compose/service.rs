use async_trait::async_trait;

use super::model::{GenerateDiaryPayload, GeneratedDiary};
use crate::error::HandlerError;

/// Text-generation capability: one single-turn prompt in, the first
/// generated text segment out. No retries; a failure is reported once.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, HandlerError>;
}

/// Prompt template for diary generation. The wording asks for natural,
/// heartfelt Japanese diary content for the given title.
pub fn build_prompt(title: &str) -> String {
    format!(
        "以下の日記のタイトルに基づいて、適切な日記の内容を日本語で生成してください。\
         自然で心のこもった内容にしてください。タイトル: {title}日記の内容:"
    )
}

/// Generate diary content for a title. An empty title is rejected before
/// the generator is ever invoked.
pub async fn generate_content(
    generator: &dyn TextGenerator,
    payload: GenerateDiaryPayload,
) -> Result<GeneratedDiary, HandlerError> {
    if payload.title.is_empty() {
        return Err(HandlerError::Validation("タイトルが必要です".to_string()));
    }

    let prompt = build_prompt(&payload.title);
    let content = generator.generate(&prompt).await?;

    Ok(GeneratedDiary {
        title: payload.title,
        content,
    })
}
