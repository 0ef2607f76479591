//! Markdown code-fence removal.
//!
//! Every triple-backtick run is dropped. A language tag (```` ```json ````) is
//! dropped with it only when the fence opens a line and the tag runs to the
//! end of that line. This is still an unconditional replace of the backticks:
//! a run that is part of a JSON string value loses its backticks, but the
//! text around it is kept.

const FENCE: &str = "```";

/// Remove fence delimiters, leaving the fenced content in place.
pub fn strip_fences(text: &str) -> String {
    let mut segments = text.split(FENCE);
    let mut out = String::with_capacity(text.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let opens_line = out.is_empty() || out.ends_with('\n');
        if opens_line {
            out.push_str(strip_language_tag(segment));
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Drop a leading `json`, `JSON`, `c++`... tag that fills the rest of its line.
fn strip_language_tag(segment: &str) -> &str {
    let rest = segment.trim_start_matches(is_tag_char);
    if rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n") {
        rest
    } else {
        segment
    }
}

const fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')
}
