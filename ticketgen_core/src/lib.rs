#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod extraction;
pub mod prompt;
pub mod ticket;
pub mod trainer;
pub mod verdict;

pub use error::{ProviderError, TrainerError, describe_failure};
pub use extraction::{
    ExtractionStatus, FieldSpec, ReplySchema, StructuredReply, TicketRecord, extract,
};
pub use ticket::{Difficulty, HintStyle, Ticket};
pub use trainer::{GeneratedTicket, Trainer, TrainerConfig};
pub use verdict::{Evaluation, Verdict};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Sampling parameters sent with a single completion request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Sampling {
    #[must_use]
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        sampling: Sampling,
    ) -> anyhow::Result<LLMResponse>;

    /// Identifiers of every model the backend advertises.
    async fn list_models(&self) -> anyhow::Result<Vec<String>>;

    fn get_default_model(&self) -> &str;
}

/// Keep only models usable for plain text generation.
#[must_use]
pub fn text_models(models: &[String]) -> Vec<String> {
    models
        .iter()
        .filter(|m| {
            let lower = m.to_lowercase();
            !lower.contains("-vision") && !lower.contains("embed")
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_models_drops_vision_and_embedding() {
        let models = vec![
            "google/gemini-2.0-flash-001".to_string(),
            "meta/llama-3.2-11b-vision-instruct".to_string(),
            "openai/text-embedding-3-small".to_string(),
            "mistral/Mistral-Embed".to_string(),
        ];
        assert_eq!(text_models(&models), vec!["google/gemini-2.0-flash-001"]);
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::user("hi");
        let value = serde_json::to_value(&msg).unwrap_or_default();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hi");
    }
}
