use thiserror::Error;

/// Failures reported by an [`LLMProvider`](crate::LLMProvider) backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid API key. Please check your key and try again.")]
    InvalidApiKey,

    #[error("API quota exceeded. Please try again later or use a different API key.")]
    QuotaExceeded,

    #[error("API key doesn't have permission to access this model.")]
    PermissionDenied,

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Model returned empty text")]
    EmptyResponse,
}

impl ProviderError {
    /// Map a non-success HTTP status to an error.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::InvalidApiKey,
            402 | 429 => Self::QuotaExceeded,
            403 => Self::PermissionDenied,
            _ => Self::Status {
                status,
                body: truncate(body, 200),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Proposed solution is empty")]
    EmptySolution,

    #[error("Ticket issue is empty")]
    EmptyIssue,
}

/// Short message suitable for showing to a person.
#[must_use]
pub fn describe_failure(err: &anyhow::Error) -> String {
    err.downcast_ref::<ProviderError>().map_or_else(
        || truncate(&err.to_string(), 100),
        ProviderError::to_string,
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
