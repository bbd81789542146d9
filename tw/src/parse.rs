//! Parsing of raw model text into typed values
//!
//! The free-text protocols here (a bare number, a ranked list of titles,
//! bulleted subtask lines) are inherently fragile, so all parsing lives in
//! this module. The planner never inspects raw response text itself; if the
//! matching strategy ever changes (normalized or fuzzy titles), only this
//! module moves.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// Response text did not match the expected shape
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected a number, got {0:?}")]
    NotANumber(String),

    #[error("ranking contained no usable lines")]
    EmptyRanking,

    #[error("breakdown contained no usable lines")]
    EmptyBreakdown,

    #[error("answer contained no text")]
    EmptyAnswer,
}

/// Parse the trimmed response text as an hours figure
///
/// Rejects non-finite values so the caller's clamp always lands in range.
pub fn parse_hours(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    debug!(%trimmed, "parse_hours: called");
    match trimmed.parse::<f64>() {
        Ok(hours) if hours.is_finite() => Ok(hours),
        _ => Err(ParseError::NotANumber(trimmed.to_string())),
    }
}

/// Strip leading "- " bullet markers and surrounding whitespace from a line
fn strip_bullet(line: &str) -> &str {
    line.trim().trim_matches(['-', ' '])
}

/// Build a title -> rank map from a ranked-titles response
///
/// Ranks are 0-based line indices in the returned order. The first
/// occurrence of a title wins; repeats do not override it. Matching is
/// exact-string, no normalization.
pub fn parse_ranking(text: &str) -> Result<HashMap<String, i32>, ParseError> {
    debug!(text_len = text.len(), "parse_ranking: called");
    let mut ranks = HashMap::new();

    for (idx, line) in text.trim().lines().enumerate() {
        let title = strip_bullet(line);
        if title.is_empty() {
            continue;
        }
        ranks.entry(title.to_string()).or_insert(idx as i32);
    }

    if ranks.is_empty() {
        return Err(ParseError::EmptyRanking);
    }
    Ok(ranks)
}

/// Split a breakdown response into subtask titles
///
/// Strips bullet markers, drops lines that are empty after stripping,
/// preserves order.
pub fn parse_subtasks(text: &str) -> Result<Vec<String>, ParseError> {
    debug!(text_len = text.len(), "parse_subtasks: called");
    let titles: Vec<String> = text
        .trim()
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if titles.is_empty() {
        return Err(ParseError::EmptyBreakdown);
    }
    Ok(titles)
}

/// Accept a free-text answer, rejecting whitespace-only responses
pub fn parse_answer(text: &str) -> Result<String, ParseError> {
    let trimmed = text.trim();
    debug!(answer_len = trimmed.len(), "parse_answer: called");
    if trimmed.is_empty() {
        return Err(ParseError::EmptyAnswer);
    }
    Ok(trimmed.to_string())
}
