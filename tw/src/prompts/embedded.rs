//! Embedded system instructions
//!
//! These are compiled into the library from .pmt files at build time.

use tracing::debug;

/// Time-estimation instruction: respond with only a number
pub const ESTIMATE: &str = include_str!("../../prompts/estimate.pmt");

/// Ranking instruction: task titles in order, one per line
pub const PRIORITIZE: &str = include_str!("../../prompts/prioritize.pmt");

/// Goal-breakdown instruction: 3-8 actionable subtasks, one per line
pub const DECOMPOSE: &str = include_str!("../../prompts/decompose.pmt");

/// Question-answering instruction: assistant over the user's task list
pub const QUERY: &str = include_str!("../../prompts/query.pmt");

/// Get the embedded instruction by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "estimate" => Some(ESTIMATE),
        "prioritize" => Some(PRIORITIZE),
        "decompose" => Some(DECOMPOSE),
        "query" => Some(QUERY),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
