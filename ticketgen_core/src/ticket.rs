//! Practice tickets: an extracted record plus the metadata the caller attaches.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::extraction::{ExtractionStatus, TicketRecord};

/// Model name recorded on tickets that were built offline.
pub const FALLBACK_MODEL: &str = "Fallback Generation";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Medium, Self::Complex];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    /// Issue used for the offline ticket at this level.
    #[must_use]
    pub const fn fallback_issue(self) -> &'static str {
        match self {
            Self::Simple => "Computer won't turn on. No lights when power button is pressed.",
            Self::Medium => "Cannot connect to WiFi. Computer sees networks but fails to connect.",
            Self::Complex => {
                "Intermittent network drops affecting VoIP calls. Issue occurs during peak hours only."
            }
        }
    }

    #[must_use]
    pub const fn hint_style(self) -> HintStyle {
        match self {
            Self::Simple => HintStyle::Hints,
            Self::Medium => HintStyle::Guidance,
            Self::Complex => HintStyle::Insights,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Simple => "Basic issues, great for beginners",
            Self::Medium => "Standard IT problems, good practice",
            Self::Complex => "Advanced challenges, test your expertise",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "easy" => Ok(Self::Simple),
            "medium" => Ok(Self::Medium),
            "complex" | "hard" => Ok(Self::Complex),
            _ => Err(anyhow::anyhow!(
                "unknown difficulty: {s} (expected simple, medium or complex)"
            )),
        }
    }
}

/// How much a hint request may give away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStyle {
    /// Gentle nudges toward the general area.
    Hints,
    /// One detail to add, one oversight, one concept.
    Guidance,
    /// Strategy, deeper investigation, alternative methods.
    Insights,
}

impl HintStyle {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hints => "Helpful Hints",
            Self::Guidance => "Targeted Guidance",
            Self::Insights => "Expert Insights",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(flatten)]
    pub record: TicketRecord,
    pub difficulty: Difficulty,
    pub model: String,
    pub created_at: DateTime<Local>,
}

impl Ticket {
    #[must_use]
    pub fn new(record: TicketRecord, difficulty: Difficulty, model: impl Into<String>) -> Self {
        Self {
            record,
            difficulty,
            model: model.into(),
            created_at: Local::now(),
        }
    }

    /// Offline ticket for when the model cannot be reached.
    #[must_use]
    pub fn fallback(difficulty: Difficulty) -> Self {
        let record = TicketRecord {
            user: format!("Practice User ({difficulty} level)"),
            issue: difficulty.fallback_issue().to_string(),
            extraction_status: ExtractionStatus::Fallback,
        };
        Self::new(record, difficulty, FALLBACK_MODEL)
    }

    #[must_use]
    pub fn timestamp(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.model == FALLBACK_MODEL
    }
}
