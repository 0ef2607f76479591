//! Best-effort recovery of structured fields from free-form model replies.
//!
//! A model asked for a JSON object may answer with prose, code fences, a
//! truncated object or nothing useful at all. [`extract`] walks a three-tier
//! cascade (strict JSON, per-field pattern recovery, fixed fallbacks) and
//! always returns a value, tagged with the [`ExtractionStatus`] of the tier
//! that produced it.

mod fence;
mod record;
mod reply;

use serde::{Deserialize, Serialize};

pub use record::{FALLBACK_ISSUE, FALLBACK_USER, TicketRecord};
pub use reply::extract;

/// Which tier of the cascade produced the extracted fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExtractionStatus {
    /// A well-formed JSON object carried every required field.
    Full,
    /// At least one field was recovered by pattern matching.
    Partial,
    /// Nothing was recoverable; every field holds its fallback.
    Fallback,
}

impl ExtractionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Partial => "PARTIAL",
            Self::Fallback => "FALLBACK",
        }
    }

    /// Whether a caller should warn that the values are not the model's own.
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        !matches!(self, Self::Full)
    }
}

impl std::fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required field and the constant used when it cannot be recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub fallback: String,
}

/// Ordered set of fields a reply is expected to carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplySchema {
    fields: Vec<FieldSpec>,
}

impl ReplySchema {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field. Re-adding a name replaces its fallback and keeps its position.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, fallback: impl Into<String>) -> Self {
        let name = name.into();
        let fallback = fallback.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.fallback = fallback;
        } else {
            self.fields.push(FieldSpec { name, fallback });
        }
        self
    }

    /// The `{"user", "issue"}` schema of a practice ticket.
    #[must_use]
    pub fn ticket() -> Self {
        Self::new()
            .field("user", FALLBACK_USER)
            .field("issue", FALLBACK_ISSUE)
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of one extraction: a value for every schema field, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredReply {
    values: Vec<(String, String)>,
    status: ExtractionStatus,
}

impl StructuredReply {
    pub(crate) const fn new(values: Vec<(String, String)>, status: ExtractionStatus) -> Self {
        Self { values, status }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub const fn status(&self) -> ExtractionStatus {
        self.status
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the fields back as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> String {
        let object: serde_json::Map<String, serde_json::Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(object).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_field_replaces_duplicate() {
        let schema = ReplySchema::new()
            .field("user", "a")
            .field("issue", "b")
            .field("user", "c");
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["user", "issue"]);
        assert_eq!(schema.fields()[0].fallback, "c");
    }

    #[test]
    fn status_degraded_flags() {
        assert!(!ExtractionStatus::Full.is_degraded());
        assert!(ExtractionStatus::Partial.is_degraded());
        assert!(ExtractionStatus::Fallback.is_degraded());
        assert_eq!(ExtractionStatus::Partial.to_string(), "PARTIAL");
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&ExtractionStatus::Fallback).unwrap_or_default();
        assert_eq!(json, "\"FALLBACK\"");
    }
}
