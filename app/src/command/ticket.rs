use std::path::PathBuf;

use ticketgen_core::Difficulty;
use tracing::info;

#[derive(Debug, Clone)]
pub struct TicketInput {
    pub config: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub model: Option<String>,
    /// Print JSON instead of the formatted ticket
    pub json: bool,
}

/// Strategy for generating a single practice ticket.
///
/// A provider failure is reported on stderr and the offline ticket for the
/// requested level is printed instead.
#[derive(Debug, Clone, Copy)]
pub struct TicketStrategy;

impl super::CommandStrategy for TicketStrategy {
    type Input = TicketInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let difficulty = input.difficulty.unwrap_or(config.trainer.difficulty);
        let trainer = super::build_trainer(&config, input.model);

        info!("Generating {} ticket", difficulty);
        let generated = trainer.generate_ticket(difficulty).await;
        if let Some(error) = &generated.error {
            eprintln!("Error: {error}");
        }

        if input.json {
            println!("{}", serde_json::to_string_pretty(&generated.ticket)?);
        } else {
            super::print_ticket(&generated.ticket);
        }
        Ok(())
    }
}
