//! Integration tests for ticket extraction from model replies.
//!
//! These tests verify that:
//! - Well-formed and fenced objects are recovered verbatim
//! - Broken objects fall back to per-field recovery
//! - Replies without any signal produce the fixed fallback record
//! - Extraction never panics on hostile input

use ticketgen_core::extraction::{FALLBACK_ISSUE, FALLBACK_USER};
use ticketgen_core::{ExtractionStatus, ReplySchema, TicketRecord, extract};

#[test]
fn test_well_formed_object_is_full() {
    let record = TicketRecord::extract(
        r#"{"user": "Sarah from Marketing", "issue": "Computer won't turn on."}"#,
    );

    assert_eq!(record.extraction_status, ExtractionStatus::Full);
    assert_eq!(record.user, "Sarah from Marketing");
    assert_eq!(record.issue, "Computer won't turn on.");
}

#[test]
fn test_fenced_object_matches_unfenced() {
    let bare = TicketRecord::extract(r#"{"user":"A from B","issue":"C"}"#);
    let fenced = TicketRecord::extract("```json\n{\"user\":\"A from B\",\"issue\":\"C\"}\n```");
    let untagged = TicketRecord::extract("```\n{\"user\":\"A from B\",\"issue\":\"C\"}\n```");

    assert_eq!(fenced, bare);
    assert_eq!(untagged, bare);
    assert_eq!(fenced.extraction_status, ExtractionStatus::Full);
}

#[test]
fn test_inline_backticks_in_value_keep_words() {
    let record = TicketRecord::extract(
        r#"{"user": "Kim from Ops", "issue": "Running ```ls -la``` shows nothing"}"#,
    );

    assert_eq!(record.extraction_status, ExtractionStatus::Full);
    assert_eq!(record.issue, "Running ls -la shows nothing");
}

#[test]
fn test_fenced_object_with_inline_backticks() {
    let record = TicketRecord::extract(
        "```json\n{\"user\": \"Kim from Ops\", \"issue\": \"```df``` reports 100%\"}\n```",
    );

    assert_eq!(record.extraction_status, ExtractionStatus::Full);
    assert_eq!(record.issue, "df reports 100%");
}

#[test]
fn test_prose_around_object() {
    let record = TicketRecord::extract(
        "Here is your ticket:\n{\"user\": \"Li from Finance\", \"issue\": \"Excel crashes on open\"}\nGood luck!",
    );

    assert_eq!(record.extraction_status, ExtractionStatus::Full);
    assert_eq!(record.user, "Li from Finance");
}

#[test]
fn test_truncated_object_is_partial() {
    let record = TicketRecord::extract(r#"Sure! {"user": "Alex from Eng", "issue":"#);

    assert_eq!(record.extraction_status, ExtractionStatus::Partial);
    assert_eq!(record.user, "Alex from Eng");
    assert_eq!(record.issue, FALLBACK_ISSUE);
}

#[test]
fn test_trailing_comma_is_partial() {
    let record = TicketRecord::extract(r#"{"user": "Max from Sales", "issue": "No VPN",}"#);

    assert_eq!(record.extraction_status, ExtractionStatus::Partial);
    assert_eq!(record.user, "Max from Sales");
    assert_eq!(record.issue, "No VPN");
}

#[test]
fn test_no_signal_is_fallback() {
    let record = TicketRecord::extract("I cannot help with that request.");

    assert_eq!(record.extraction_status, ExtractionStatus::Fallback);
    assert_eq!(record.user, FALLBACK_USER);
    assert_eq!(record.issue, FALLBACK_ISSUE);
}

#[test]
fn test_empty_field_invalidates_whole_object() {
    let record = TicketRecord::extract(r#"{"user": "", "issue": "Something"}"#);

    assert_eq!(record.extraction_status, ExtractionStatus::Partial);
    assert_eq!(record.user, FALLBACK_USER);
    assert_eq!(record.issue, "Something");
}

#[test]
fn test_missing_field_invalidates_whole_object() {
    let record = TicketRecord::extract(r#"{"user": "Ana from Legal"}"#);

    assert_eq!(record.extraction_status, ExtractionStatus::Partial);
    assert_eq!(record.user, "Ana from Legal");
    assert_eq!(record.issue, FALLBACK_ISSUE);
}

#[test]
fn test_partial_and_fallback_output_reextracts_as_full() {
    let inputs = [
        r#"Sure! {"user": "Alex from Eng", "issue":"#,
        "I cannot help with that request.",
        r#"{"user": "", "issue": "Something"}"#,
    ];

    for input in inputs {
        let first = TicketRecord::extract(input);
        let second = TicketRecord::extract(&first.to_json());
        assert_eq!(second.extraction_status, ExtractionStatus::Full);
        assert_eq!(second.user, first.user);
        assert_eq!(second.issue, first.issue);
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let input = r#"noise {"user": "Bo from Ops", "issue": "Printer offline" trailing"#;
    assert_eq!(TicketRecord::extract(input), TicketRecord::extract(input));
}

#[test]
fn test_hostile_inputs_never_panic() {
    let long = "{".repeat(100_000);
    let lossy = String::from_utf8_lossy(&[0xff, 0xfe, b'{', 0x80, b'}', 0x00]).into_owned();
    let inputs = [
        "",
        "{",
        "}",
        "}{",
        "{{{{}}}}",
        "``````",
        "```json",
        "\"user\": \"",
        "\"user\":\"\\",
        long.as_str(),
        lossy.as_str(),
    ];

    for input in inputs {
        let record = TicketRecord::extract(input);
        assert!(!record.user.is_empty());
        assert!(!record.issue.is_empty());
    }
}

#[test]
fn test_custom_schema_fields() {
    let schema = ReplySchema::new()
        .field("title", "Untitled")
        .field("priority", "normal");

    let reply = extract(r#"{"title": "Reset password", "priority": "high"}"#, &schema);
    assert_eq!(reply.status(), ExtractionStatus::Full);
    assert_eq!(reply.get("priority"), Some("high"));

    let reply = extract(r#"{"title": "Reset password""#, &schema);
    assert_eq!(reply.status(), ExtractionStatus::Partial);
    assert_eq!(reply.get("priority"), Some("normal"));
    assert_eq!(reply.get("missing"), None);
}
