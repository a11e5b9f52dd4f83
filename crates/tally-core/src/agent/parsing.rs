//! JSON extraction helpers for agent responses
//!
//! Agent replies often wrap the JSON payload in prose or formatting
//! artifacts. These functions locate the first balanced object or array
//! span and hand it to a strict structural parse; anything less yields a
//! parse error, never a panic.

use crate::error::{Error, Result};

use super::types::{CategorizationData, InsightsData};

/// Locate the first balanced JSON object or array span in `text`.
///
/// The scan tracks string literals, so delimiters inside quoted text do
/// not unbalance the count. Returns `None` when no span closes.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let (open, close) = if text.as_bytes()[start] == b'{' {
        ('{', '}')
    } else {
        ('[', ']')
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..=start + i]);
            }
        }
    }

    None
}

/// Truncate long raw text for error messages.
fn truncate_raw(text: &str) -> String {
    const LIMIT: usize = 200;
    if text.len() <= LIMIT {
        return text.to_string();
    }
    let mut end = LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Parse a categorization result from an agent response.
pub fn parse_categorization(response: &str) -> Result<CategorizationData> {
    let response = response.trim();
    let json = extract_json(response).ok_or_else(|| {
        Error::Parse(format!(
            "No JSON found in categorization response | Raw: {}",
            truncate_raw(response)
        ))
    })?;

    serde_json::from_str(json).map_err(|e| {
        Error::Parse(format!(
            "Invalid categorization JSON: {} | Raw: {}",
            e,
            truncate_raw(json)
        ))
    })
}

/// Parse an insights report from an agent response.
pub fn parse_insights(response: &str) -> Result<InsightsData> {
    let response = response.trim();
    let json = extract_json(response).ok_or_else(|| {
        Error::Parse(format!(
            "No JSON found in insights response | Raw: {}",
            truncate_raw(response)
        ))
    })?;

    serde_json::from_str(json).map_err(|e| {
        Error::Parse(format!(
            "Invalid insights JSON: {} | Raw: {}",
            e,
            truncate_raw(json)
        ))
    })
}
