use serde::{Deserialize, Serialize};

use super::{ExtractionStatus, ReplySchema, StructuredReply, extract};

/// Placeholder requester when the reply names none.
pub const FALLBACK_USER: &str = "User from Department";

/// Placeholder problem statement when the reply describes none.
pub const FALLBACK_ISSUE: &str = "Technical issue requiring assistance";

/// A support ticket as recovered from a model reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRecord {
    pub user: String,
    pub issue: String,
    pub extraction_status: ExtractionStatus,
}

impl TicketRecord {
    /// Extract a ticket from raw model text. Total over all inputs.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        Self::from(extract(text, &ReplySchema::ticket()))
    }

    /// The record used when nothing could be recovered.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            user: FALLBACK_USER.to_string(),
            issue: FALLBACK_ISSUE.to_string(),
            extraction_status: ExtractionStatus::Fallback,
        }
    }

    /// The `user`/`issue` pair as a JSON object, without the status tag.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "user": self.user,
            "issue": self.issue,
        })
        .to_string()
    }
}

impl From<StructuredReply> for TicketRecord {
    fn from(reply: StructuredReply) -> Self {
        Self {
            user: reply.get("user").unwrap_or(FALLBACK_USER).to_string(),
            issue: reply.get("issue").unwrap_or(FALLBACK_ISSUE).to_string(),
            extraction_status: reply.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_extraction_of_nothing() {
        assert_eq!(TicketRecord::extract(""), TicketRecord::fallback());
    }

    #[test]
    fn to_json_has_only_schema_fields() {
        let record = TicketRecord::fallback();
        let value: serde_json::Value =
            serde_json::from_str(&record.to_json()).unwrap_or_default();
        assert_eq!(value["user"], FALLBACK_USER);
        assert_eq!(value["issue"], FALLBACK_ISSUE);
        assert!(value.get("extraction_status").is_none());
    }
}
