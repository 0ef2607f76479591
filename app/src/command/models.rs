use std::path::PathBuf;

use ticketgen_core::{LLMProvider, describe_failure, text_models};

#[derive(Debug, Clone)]
pub struct ModelsInput {
    pub config: Option<PathBuf>,
    /// Include vision and embedding models
    pub all: bool,
}

/// Strategy for listing the provider's model catalog.
#[derive(Debug, Clone, Copy)]
pub struct ModelsStrategy;

impl super::CommandStrategy for ModelsStrategy {
    type Input = ModelsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let provider = super::build_provider(&config);

        let models = provider
            .list_models()
            .await
            .map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;
        let shown = if input.all {
            models.clone()
        } else {
            text_models(&models)
        };

        if shown.is_empty() {
            println!("No text generation models found");
            return Ok(());
        }

        let default_model = config.trainer.model_or(provider.get_default_model());
        println!("Available models ({} of {}):", shown.len(), models.len());
        for model in &shown {
            let marker = if model == default_model {
                " (default)"
            } else {
                ""
            };
            println!("  {model}{marker}");
        }
        Ok(())
    }
}
