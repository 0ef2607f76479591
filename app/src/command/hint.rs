use std::path::PathBuf;

use ticketgen_core::{Difficulty, describe_failure};

#[derive(Debug, Clone)]
pub struct HintInput {
    pub config: Option<PathBuf>,
    pub issue: String,
    pub solution: String,
    pub difficulty: Option<Difficulty>,
    pub model: Option<String>,
}

/// Strategy for requesting hints on a proposed solution.
#[derive(Debug, Clone, Copy)]
pub struct HintStrategy;

impl super::CommandStrategy for HintStrategy {
    type Input = HintInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let difficulty = input.difficulty.unwrap_or(config.trainer.difficulty);
        let trainer = super::build_trainer(&config, input.model);

        let hints = trainer
            .hints(&input.issue, &input.solution, difficulty)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to generate hints: {}", describe_failure(&e)))?;

        println!("{}\n", difficulty.hint_style().title());
        println!("{hints}");
        Ok(())
    }
}
