use std::path::PathBuf;

use ticketgen_core::Difficulty;

/// Strategy for displaying configuration information.
///
/// Outputs the masked API key, provider endpoint and trainer defaults.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.as_deref())?;

        println!("=== ticketgen Configuration ===\n");

        println!("Provider:");
        let openrouter = &config.providers.openrouter;
        if openrouter.has_placeholder_key() {
            println!("  API Key: (not set)");
        } else {
            println!("  API Key: {}", mask_key(&openrouter.api_key));
        }
        println!("  Base URL: {}", openrouter.base_url);
        println!();

        let trainer = &config.trainer;
        println!("Trainer Defaults:");
        println!("  Model: {}", trainer.model_or("(provider default)"));
        println!(
            "  Difficulty: {} ({})",
            trainer.difficulty,
            trainer.difficulty.description()
        );
        for (name, sampling) in [
            ("Ticket", trainer.ticket),
            ("Hints", trainer.hints),
            ("Check", trainer.check),
        ] {
            println!(
                "  {name}: temperature={}, max_tokens={}",
                sampling.temperature, sampling.max_tokens
            );
        }
        println!();

        println!("Difficulty Levels:");
        for level in Difficulty::ALL {
            println!(
                "  {:<8} {} ({})",
                level.as_str(),
                level.description(),
                level.hint_style().title()
            );
        }

        Ok(())
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}
