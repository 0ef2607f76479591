//! Classifying the model's evaluation of a proposed solution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    Partially,
    No,
    /// The reply did not open with one of the expected answers.
    Unclear,
}

impl Verdict {
    /// Read the verdict from the first word of `text`, skipping leading
    /// emoji, markdown and punctuation. Never fails.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let word: String = text
            .chars()
            .skip_while(|c| !c.is_alphabetic())
            .take_while(|c| c.is_alphabetic())
            .collect();

        match word.to_uppercase().as_str() {
            "YES" => Self::Yes,
            "PARTIALLY" | "PARTIAL" => Self::Partially,
            "NO" => Self::No,
            _ => Self::Unclear,
        }
    }

    #[must_use]
    pub const fn needs_revision(self) -> bool {
        matches!(self, Self::Partially | Self::No)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yes => "✅",
            Self::Partially => "⚠️",
            Self::No => "❌",
            Self::Unclear => "ℹ️",
        }
    }
}

/// The model's answer together with the verdict read from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub text: String,
}

impl Evaluation {
    #[must_use]
    pub fn from_reply(text: &str) -> Self {
        let text = text.trim();
        Self {
            verdict: Verdict::classify(text),
            text: text.to_string(),
        }
    }
}
