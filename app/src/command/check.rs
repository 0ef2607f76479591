use std::path::PathBuf;

use ticketgen_core::{Evaluation, describe_failure};

#[derive(Debug, Clone)]
pub struct CheckInput {
    pub config: Option<PathBuf>,
    pub issue: String,
    pub solution: String,
    pub model: Option<String>,
}

/// Strategy for checking whether a solution would fix the issue.
#[derive(Debug, Clone, Copy)]
pub struct CheckStrategy;

impl super::CommandStrategy for CheckStrategy {
    type Input = CheckInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let trainer = super::build_trainer(&config, input.model);

        let evaluation = trainer
            .check_solution(&input.issue, &input.solution)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to evaluate solution: {}", describe_failure(&e)))?;

        print_evaluation(&evaluation);
        Ok(())
    }
}

pub(super) fn print_evaluation(evaluation: &Evaluation) {
    println!("📊 Solution Evaluation\n");
    if evaluation.text.starts_with(evaluation.verdict.symbol()) {
        println!("{}", evaluation.text);
    } else {
        println!("{} {}", evaluation.verdict.symbol(), evaluation.text);
    }
    if evaluation.verdict.needs_revision() {
        println!("\n💡 Try getting hints to improve your solution!");
    }
}
