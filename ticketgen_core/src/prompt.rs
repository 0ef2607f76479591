//! Request messages for the three trainer operations.

use crate::ChatMessage;
use crate::extraction::ReplySchema;
use crate::ticket::{Difficulty, HintStyle};

/// Ask for a ticket as a JSON object carrying `schema`'s fields.
#[must_use]
pub fn ticket_request(difficulty: Difficulty, schema: &ReplySchema) -> Vec<ChatMessage> {
    let level = match difficulty {
        Difficulty::Simple => {
            "a simple, common IT support ticket with a straightforward fix, suitable for beginners"
        }
        Difficulty::Medium => {
            "a medium-difficulty IT support ticket that needs some technical knowledge and several troubleshooting steps"
        }
        Difficulty::Complex => {
            "a complex IT support ticket involving several systems, error messages and a specific scenario"
        }
    };

    let fields: Vec<String> = schema
        .fields()
        .iter()
        .map(|field| {
            let hint = match field.name.as_str() {
                "user" => "name and department of the person reporting",
                "issue" => "the problem as they describe it",
                _ => "free text",
            };
            format!("- \"{}\": {hint}", field.name)
        })
        .collect();

    vec![ChatMessage::user(format!(
        "Create {level}. Provide ONLY a valid JSON object with these exact fields:\n{}\n\n\
Return ONLY the JSON object, no other text.",
        fields.join("\n")
    ))]
}

/// Ask for hints on a proposed solution without revealing the answer.
#[must_use]
pub fn hint_request(issue: &str, solution: &str, difficulty: Difficulty) -> Vec<ChatMessage> {
    let (role, ask) = match difficulty.hint_style() {
        HintStyle::Hints => (
            "a helpful IT mentor",
            "Give 2-3 gentle hints that would improve the solution without giving away the full answer. Keep it encouraging.",
        ),
        HintStyle::Guidance => (
            "an IT trainer",
            "Point out one area that needs more detail, one common oversight for this kind of problem and one technical concept to consider. Be specific but do not solve it.",
        ),
        HintStyle::Insights => (
            "a senior IT expert",
            "Offer one strategic consideration, one deeper investigation path and one alternative method. Challenge assumptions without giving direct answers.",
        ),
    };

    vec![
        ChatMessage::system(format!("You are {role}.")),
        ChatMessage::user(format!(
            "Issue: {issue}\n\nProposed solution: {solution}\n\n{ask}"
        )),
    ]
}

/// Ask whether a solution fixes the issue, opening with a fixed verdict phrase.
#[must_use]
pub fn check_request(issue: &str, solution: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(format!(
        "Evaluate whether this solution would fix the IT issue.\n\n\
Issue: {issue}\n\nProposed solution: {solution}\n\n\
Start your reply with exactly one of:\n\
- \"✅ YES - This solution would likely fix the issue.\"\n\
- \"⚠️ PARTIALLY - This solution might help but needs improvements.\"\n\
- \"❌ NO - This solution would not fix the issue.\"\n\
Then give ONE brief reason in a single sentence."
    ))]
}
