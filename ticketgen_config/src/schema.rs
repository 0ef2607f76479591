use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use ticketgen_core::TrainerConfig;

const CONFIG_DIR: &str = "ticketgen";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "providers": {
    "openrouter": {
      "api_key": "your-openrouter-api-key-here",
      "base_url": "https://openrouter.ai/api/v1"
    }
  },
  "trainer": {
    "model": "",
    "difficulty": "medium",
    "ticket": { "temperature": 0.3, "max_tokens": 300 },
    "hints": { "temperature": 0.2, "max_tokens": 400 },
    "check": { "temperature": 0.1, "max_tokens": 200 }
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub trainer: TrainerConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openrouter: OpenRouterConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    #[serde(default = "OpenRouterConfig::default_base_url")]
    pub base_url: String,
}

impl OpenRouterConfig {
    fn default_base_url() -> String {
        "https://openrouter.ai/api/v1".to_string()
    }

    /// Whether the key is still the template placeholder or blank.
    #[must_use]
    pub fn has_placeholder_key(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || key.starts_with("your-")
    }
}

impl Config {
    /// `~/ticketgen/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'ticketgen init' to create config.",
                config_path.display()
            );
        }

        debug!("Reading config from {}", config_path.display());
        let content = std::fs::read_to_string(config_path)?;
        Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", config_path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn create_config() -> anyhow::Result<()> {
        Self::create_config_at(&Self::default_path()?)
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenRouter API key");
        println!("   2. Run 'ticketgen models' to see which models you can use");
        println!("   3. Run 'ticketgen practice' to start a practice session");
        println!();
        println!("🔧 Configuration options:");
        println!("   - trainer.model: model identifier from the catalog (blank: provider default)");
        println!("   - trainer.difficulty: simple, medium or complex");
        println!("   - providers.openrouter.base_url: any OpenAI-compatible endpoint");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketgen_core::{Difficulty, Sampling};

    #[test]
    fn template_parses() {
        let config = Config::from_json(CONFIG_TEMPLATE);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.trainer.difficulty, Difficulty::Medium);
            assert_eq!(config.trainer.hints, Sampling::new(0.2, 400));
            assert_eq!(config.trainer.model_or("provider/default"), "provider/default");
            assert!(config.providers.openrouter.has_placeholder_key());
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::from_json(r#"{"providers": {"openrouter": {"api_key": "sk-or-1"}}}"#);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.providers.openrouter.base_url, "https://openrouter.ai/api/v1");
            assert_eq!(config.trainer, TrainerConfig::default());
            assert!(!config.providers.openrouter.has_placeholder_key());
        }
    }

    #[test]
    fn partial_trainer_section_keeps_other_defaults() {
        let config = Config::from_json(
            r#"{"providers": {"openrouter": {"api_key": "k"}},
                "trainer": {"model": "meta/llama", "difficulty": "complex"}}"#,
        );
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.trainer.model, "meta/llama");
            assert_eq!(config.trainer.difficulty, Difficulty::Complex);
            assert_eq!(config.trainer.check, TrainerConfig::default().check);
        }
    }

    #[test]
    fn missing_provider_is_an_error() {
        assert!(Config::from_json("{}").is_err());
    }

    #[test]
    fn load_from_missing_path_mentions_init() {
        let err = Config::load_from(Path::new("/nonexistent/ticketgen/config.json"));
        let msg = err.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("ticketgen init"));
    }
}
