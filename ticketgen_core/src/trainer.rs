//! Ticket practice workflow: generate a ticket, then hint at or judge a
//! proposed solution.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{TrainerError, describe_failure};
use crate::extraction::{ReplySchema, TicketRecord};
use crate::ticket::{Difficulty, Ticket};
use crate::verdict::Evaluation;
use crate::{ChatMessage, LLMProvider, Sampling, prompt};

/// Per-operation sampling and the model to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerConfig {
    /// Blank selects the provider's default model.
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "TrainerConfig::default_ticket")]
    pub ticket: Sampling,
    #[serde(default = "TrainerConfig::default_hints")]
    pub hints: Sampling,
    #[serde(default = "TrainerConfig::default_check")]
    pub check: Sampling,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            difficulty: Difficulty::default(),
            ticket: Self::default_ticket(),
            hints: Self::default_hints(),
            check: Self::default_check(),
        }
    }
}

impl TrainerConfig {
    /// The configured model, or `fallback` when none is set.
    #[must_use]
    pub fn model_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let model = self.model.trim();
        if model.is_empty() {
            fallback
        } else {
            model
        }
    }

    const fn default_ticket() -> Sampling {
        Sampling::new(0.3, 300)
    }

    const fn default_hints() -> Sampling {
        Sampling::new(0.2, 400)
    }

    const fn default_check() -> Sampling {
        Sampling::new(0.1, 200)
    }
}

/// A ticket, plus the reason it is an offline one if the model call failed.
#[derive(Debug, Clone)]
pub struct GeneratedTicket {
    pub ticket: Ticket,
    pub error: Option<String>,
}

pub struct Trainer<P: LLMProvider> {
    provider: P,
    config: TrainerConfig,
}

impl<P: LLMProvider> Trainer<P> {
    pub const fn new(provider: P, config: TrainerConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    #[must_use]
    pub const fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Model sent with every request.
    #[must_use]
    pub fn model(&self) -> &str {
        self.config.model_or(self.provider.get_default_model())
    }

    /// Generate a ticket. Always yields one: a provider failure produces the
    /// offline ticket for `difficulty` and the failure's description.
    pub async fn generate_ticket(&self, difficulty: Difficulty) -> GeneratedTicket {
        let messages = prompt::ticket_request(difficulty, &ReplySchema::ticket());

        match self.complete(&messages, self.config.ticket).await {
            Ok(text) => {
                let record = TicketRecord::extract(&text);
                if record.extraction_status.is_degraded() {
                    warn!(
                        "Ticket reply only partly usable: status={}",
                        record.extraction_status
                    );
                }
                GeneratedTicket {
                    ticket: Ticket::new(record, difficulty, self.model()),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Ticket generation failed, using offline ticket: {e:#}");
                GeneratedTicket {
                    ticket: Ticket::fallback(difficulty),
                    error: Some(describe_failure(&e)),
                }
            }
        }
    }

    pub async fn hints(
        &self,
        issue: &str,
        solution: &str,
        difficulty: Difficulty,
    ) -> anyhow::Result<String> {
        check_inputs(issue, solution)?;
        let messages = prompt::hint_request(issue, solution, difficulty);
        self.complete(&messages, self.config.hints).await
    }

    pub async fn check_solution(&self, issue: &str, solution: &str) -> anyhow::Result<Evaluation> {
        check_inputs(issue, solution)?;
        let messages = prompt::check_request(issue, solution);
        let text = self.complete(&messages, self.config.check).await?;
        Ok(Evaluation::from_reply(&text))
    }

    async fn complete(&self, messages: &[ChatMessage], sampling: Sampling) -> anyhow::Result<String> {
        let model = self.model();
        info!(
            "Requesting completion: model={}, max_tokens={}",
            model, sampling.max_tokens
        );
        let response = self.provider.chat(messages, model, sampling).await?;
        if let Some(usage) = &response.usage {
            info!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }
        Ok(response.content.trim().to_string())
    }
}

fn check_inputs(issue: &str, solution: &str) -> Result<(), TrainerError> {
    if issue.trim().is_empty() {
        return Err(TrainerError::EmptyIssue);
    }
    if solution.trim().is_empty() {
        return Err(TrainerError::EmptySolution);
    }
    Ok(())
}
