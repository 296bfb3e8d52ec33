//! Parse generated responses into typed step results

use neoguard_domain::{RelatedArticle, TruthEstimate};
use serde_json::Value;

use crate::error::ParseError;

/// Parse a truth-percentage reply into a clamped estimate
///
/// Mirrors how a human-facing number field is read: leading whitespace
/// and an optional sign are accepted, digits are consumed until the
/// first non-digit, and everything after is ignored, so `"85%"` and
/// `"85 percent, roughly"` both read as 85. Out-of-range values clamp
/// into [0, 100]. A reply with no leading number yields `None`.
pub fn parse_truth_response(response: &str) -> Option<TruthEstimate> {
    parse_leading_int(response).map(TruthEstimate::from_clamped)
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let mut chars = text.trim().chars().peekable();

    let mut negative = false;
    match chars.peek() {
        Some('+') => {
            chars.next();
        }
        Some('-') => {
            negative = true;
            chars.next();
        }
        _ => {}
    }

    let mut value: i64 = 0;
    let mut saw_digit = false;
    for c in chars {
        match c.to_digit(10) {
            Some(digit) => {
                saw_digit = true;
                // Saturate instead of overflowing; the caller clamps anyway
                value = value.saturating_mul(10).saturating_add(digit as i64);
            }
            None => break,
        }
    }

    if !saw_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parse a generated article list
///
/// Generators sometimes wrap JSON in markdown code fences; those are
/// stripped first. The result must be a JSON array and every entry must
/// deserialize into [`RelatedArticle`] with all five fields non-empty.
/// Any violation rejects the whole list; partial results would mix
/// generated and canned entries, which is worse than either alone.
pub fn parse_articles_response(response: &str) -> Result<Vec<RelatedArticle>, ParseError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let entries = json.as_array().ok_or_else(|| {
        ParseError::NotAnArray(match &json {
            Value::Object(_) => "an object".to_string(),
            other => format!("{}", other),
        })
    })?;

    let mut articles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let article: RelatedArticle =
            serde_json::from_value(entry.clone()).map_err(|e| ParseError::InvalidArticle {
                index,
                reason: e.to_string(),
            })?;

        if let Err(reason) = check_fields(&article) {
            return Err(ParseError::InvalidArticle { index, reason });
        }

        articles.push(article);
    }

    Ok(articles)
}

fn check_fields(article: &RelatedArticle) -> Result<(), String> {
    let fields = [
        ("source", &article.source),
        ("logo", &article.logo),
        ("headline", &article.headline),
        ("excerpt", &article.excerpt),
        ("url", &article.url_slug),
    ];

    for (name, value) in fields {
        if value.is_empty() {
            return Err(format!("empty field '{}'", name));
        }
    }
    Ok(())
}

/// Strip a markdown code fence, if present
fn extract_json(response: &str) -> Result<String, ParseError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ParseError::InvalidJson("Empty code block".to_string()));
        }

        // Skip the opening fence line and the closing fence line
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
