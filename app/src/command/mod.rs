//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate zero-sized strategy type with its own input
//! type, dispatched statically from `main`.

use std::path::Path;

use ticketgen_config::Config;
use ticketgen_core::{ExtractionStatus, Ticket, Trainer};
use ticketgen_providers::OpenRouterProvider;
use tracing::{info, warn};

mod check;
mod extract;
mod hint;
mod info;
mod init;
mod models;
mod practice;
mod ticket;
mod version;

pub use check::{CheckInput, CheckStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use hint::{HintInput, HintStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use models::{ModelsInput, ModelsStrategy};
pub use practice::{PracticeInput, PracticeStrategy};
pub use ticket::{TicketInput, TicketStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    info!("Loaded config");
    Ok(config)
}

fn build_provider(config: &Config) -> OpenRouterProvider {
    let openrouter = &config.providers.openrouter;
    if openrouter.has_placeholder_key() {
        warn!("No API key configured; requests will be rejected by the provider");
    }
    OpenRouterProvider::new(openrouter.api_key.clone()).with_base_url(openrouter.base_url.clone())
}

/// Provider and trainer from config, with an optional model override.
fn build_trainer(config: &Config, model: Option<String>) -> Trainer<OpenRouterProvider> {
    let trainer = Trainer::new(build_provider(config), config.trainer.clone());
    match model {
        Some(model) => trainer.with_model(model),
        None => trainer,
    }
}

fn print_ticket(ticket: &Ticket) {
    println!(
        "📋 Practice Ticket [{}]",
        ticket.difficulty.as_str().to_uppercase()
    );
    println!("👤 From: {}", ticket.record.user);
    println!("🕒 Submitted: {}", ticket.timestamp());
    println!("🤖 Model: {}", ticket.model);
    println!();
    println!("📝 Issue:");
    println!("{}", ticket.record.issue);
    println!();
    if let Some(note) = ticket_note(ticket) {
        eprintln!("⚠️ {note}");
    }
}

/// Warning for tickets that are not the model's own words.
fn ticket_note(ticket: &Ticket) -> Option<&'static str> {
    if ticket.is_offline() {
        return Some("The model could not be reached; this ticket was generated offline.");
    }
    extraction_note(ticket.record.extraction_status)
}

const fn extraction_note(status: ExtractionStatus) -> Option<&'static str> {
    match status {
        ExtractionStatus::Full => None,
        ExtractionStatus::Partial => {
            Some("The model's reply was malformed; some ticket fields are placeholders.")
        }
        ExtractionStatus::Fallback => {
            Some("The model's reply could not be read; the ticket uses placeholder text.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketgen_core::{Difficulty, TicketRecord};

    #[test]
    fn offline_ticket_note_says_offline() {
        let ticket = Ticket::fallback(Difficulty::Medium);
        let note = ticket_note(&ticket).unwrap_or_default();
        assert!(note.contains("offline"));
        assert!(!note.contains("reply"));
    }

    #[test]
    fn model_ticket_note_follows_extraction() {
        let full = Ticket::new(
            TicketRecord::extract(r#"{"user": "Jo from Legal", "issue": "Scanner jams"}"#),
            Difficulty::Simple,
            "some/model",
        );
        assert!(ticket_note(&full).is_none());

        let garbled = Ticket::new(TicketRecord::extract("no json"), Difficulty::Simple, "some/model");
        assert!(ticket_note(&garbled).is_some_and(|n| n.contains("could not be read")));
    }

    #[test]
    fn only_degraded_extractions_get_a_note() {
        assert!(extraction_note(ExtractionStatus::Full).is_none());
        assert!(extraction_note(ExtractionStatus::Partial).is_some());
        assert!(extraction_note(ExtractionStatus::Fallback).is_some());
    }
}
