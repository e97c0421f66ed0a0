//! Recovery of a single JSON object from free-form model text.
//!
//! Models are asked for bare JSON but regularly wrap it in markdown fences or
//! surround it with commentary. Recovery runs in three steps: fences are
//! stripped, the span between the first `{` and the last `}` is preferred
//! when it is long enough, and if that still does not parse, a string-aware
//! scanner looks for the first balanced object that does.
//!
//! Everything here is pure: the same text always produces the same outcome.

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::{CoreError, UNPARSEABLE_OUTPUT_DETAILS},
    food_analysis::entities::ModelReply,
};

/// A brace span must be longer than this to replace the trimmed text.
pub const MIN_BRACE_SPAN_LEN: usize = 10;

/// Which recovery step produced the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// The fence-stripped, trimmed text parsed on its own.
    Trimmed,
    /// The first-`{`-to-last-`}` span parsed.
    BraceSpan,
    /// A balanced object found by the string-aware scanner parsed.
    BalancedScan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    pub value: Value,
    pub recovery: Recovery,
}

/// Normalizes a whole model reply.
///
/// Fails with [`CoreError::InvalidUpstreamResponse`] when the reply carries no usable text.
pub fn normalize_reply(reply: &ModelReply) -> Result<NormalizedReply, CoreError> {
    let text = reply.text().ok_or(CoreError::InvalidUpstreamResponse)?;
    normalize_text(&text)
}

/// Recovers a JSON object from raw model text.
///
/// On failure the error carries `raw` untouched, not the cleaned candidate.
pub fn normalize_text(raw: &str) -> Result<NormalizedReply, CoreError> {
    let cleaned = strip_code_fences(raw);
    let trimmed = cleaned.trim();

    let (candidate, recovery) = match brace_span(trimmed) {
        Some(span) if span.chars().count() > MIN_BRACE_SPAN_LEN => (span, Recovery::BraceSpan),
        _ => (trimmed, Recovery::Trimmed),
    };

    match parse_object(candidate) {
        Ok(value) => return Ok(NormalizedReply { value, recovery }),
        Err(e) => tracing::debug!("Candidate JSON did not parse ({:?}): {}", recovery, e),
    }

    if let Some(value) = scan_balanced_object(trimmed) {
        return Ok(NormalizedReply {
            value,
            recovery: Recovery::BalancedScan,
        });
    }

    Err(CoreError::UnparseableModelOutput {
        details: UNPARSEABLE_OUTPUT_DETAILS.to_string(),
        raw_response: raw.to_string(),
    })
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, wherever it appears.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Substring from the first `{` to the last `}` after it.
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn parse_object(candidate: &str) -> Result<Value, String> {
    let value: Value = serde_json::from_str(candidate).map_err(|e| e.to_string())?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("expected a JSON object".to_string())
    }
}

/// Upper bound on scanner candidates handed to the JSON parser.
const MAX_SCAN_CANDIDATES: usize = 32;

/// Returns the first long enough balanced object, by opening position, that parses.
fn scan_balanced_object(text: &str) -> Option<Value> {
    let mut spans = balanced_spans(text);
    spans.sort_unstable_by_key(|&(start, _)| start);

    spans
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .filter(|span| span.chars().nth(MIN_BRACE_SPAN_LEN).is_some())
        .take(MAX_SCAN_CANDIDATES)
        .find_map(|span| parse_object(span).ok())
}

/// Byte ranges of every balanced `{...}` in `text`, collected in one pass.
///
/// Quotes open JSON string literals only inside a brace, so prose quotes
/// before an object do not hide it.
fn balanced_spans(text: &str) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push(i),
            b'}' => {
                if let Some(start) = open.pop() {
                    spans.push((start, i + 1));
                }
            }
            _ => {}
        }
    }

    spans
}
