//! LLM request/response types for Taskwise
//!
//! One completion request models one gateway call: an instruction/content
//! pair plus the two per-call tunables. Provider-agnostic; the clients
//! translate into their own wire formats.

use serde::{Deserialize, Serialize};

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System instruction fixing the model's role and output contract
    pub system_prompt: String,

    /// User content for this call
    pub user_content: String,

    /// Sampling temperature in [0, 1]
    pub temperature: f32,

    /// Output token budget for this call (capped by client config)
    pub max_tokens: u32,
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw response text, if the model produced any
    pub content: Option<String>,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Convenience constructor for a plain text response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            usage: TokenUsage::default(),
        }
    }
}

/// Token usage for cost tracking
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_response_text() {
        let resp = CompletionResponse::text("3.5");
        assert_eq!(resp.content.as_deref(), Some("3.5"));
        assert_eq!(resp.usage.input_tokens, 0);
    }

    #[test]
    fn test_completion_request_serde_roundtrip() {
        let req = CompletionRequest {
            system_prompt: "Respond with only a number.".to_string(),
            user_content: "Task: Write docs".to_string(),
            temperature: 0.3,
            max_tokens: 10,
        };

        let json = serde_json::to_string(&req).unwrap();
        let back: CompletionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_content, req.user_content);
        assert_eq!(back.max_tokens, 10);
    }
}
