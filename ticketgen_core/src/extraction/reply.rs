use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::fence::strip_fences;
use super::{ExtractionStatus, FieldSpec, ReplySchema, StructuredReply};

/// Recover `schema`'s fields from raw model text.
///
/// Tiers, each tried only when the previous one fails:
/// 1. the span from the first `{` to the last `}` parses as a JSON object
///    whose schema fields are all non-blank strings: [`ExtractionStatus::Full`];
/// 2. per-field `"name": "value"` pattern matches over the whole text; at
///    least one hit gives [`ExtractionStatus::Partial`], misses take their fallback;
/// 3. every field takes its fallback: [`ExtractionStatus::Fallback`].
///
/// Never fails and never panics, whatever the input.
#[must_use]
pub fn extract(text: &str, schema: &ReplySchema) -> StructuredReply {
    let cleaned = strip_fences(text);

    if let Some(values) = strict_object(&cleaned, schema.fields()) {
        debug!("Reply parsed as a complete JSON object");
        return StructuredReply::new(values, ExtractionStatus::Full);
    }

    let mut recovered = 0usize;
    let values = schema
        .fields()
        .iter()
        .map(|field| {
            let value = recover_field(&cleaned, &field.name).map_or_else(
                || field.fallback.clone(),
                |v| {
                    recovered += 1;
                    v
                },
            );
            (field.name.clone(), value)
        })
        .collect();

    let status = if recovered > 0 {
        debug!(
            "Recovered {}/{} fields by pattern",
            recovered,
            schema.fields().len()
        );
        ExtractionStatus::Partial
    } else {
        warn!("No structured fields found in reply ({} bytes)", text.len());
        ExtractionStatus::Fallback
    };

    StructuredReply::new(values, status)
}

/// Tier 1. Only the outermost `{ ... }` span is tried; inner spans are not.
fn strict_object(text: &str, fields: &[FieldSpec]) -> Option<Vec<(String, String)>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    let object = match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return None,
        Err(e) => {
            debug!("Outermost brace span is not valid JSON: {e}");
            return None;
        }
    };

    // A single blank or missing field rejects the whole object.
    fields
        .iter()
        .map(|field| {
            let value = object.get(&field.name)?.as_str()?;
            if value.trim().is_empty() {
                None
            } else {
                Some((field.name.clone(), value.to_string()))
            }
        })
        .collect()
}

/// Tier 2. Matches a quoted key followed by a non-empty quoted value.
fn recover_field(text: &str, name: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]+)""#, regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(text)?.get(1)?.as_str();
    let value = decode_json_string(raw);
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Resolve JSON escapes (`\n`, `\u00e9`) when the capture is a valid string body.
fn decode_json_string(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string())
}
