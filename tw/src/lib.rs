//! Taskwise - AI planning core for task management
//!
//! Taskwise turns free-text output from an external language model into
//! structured task attributes: duration estimates, relative priority
//! ordering, goal decomposition into subtasks, and free-text answers to
//! questions about the task list. Persistence, auth, and
//! HTTP routing live in the surrounding system; this crate is only the
//! orchestration between prompts, the model gateway, and response parsing.
//!
//! # Core Concepts
//!
//! - **One call per operation**: no retries, no caching, no background work
//! - **Fallbacks, not failures**: callers always receive a well-formed value;
//!   degraded mode is surfaced as a typed cause, never an error
//! - **Parsing behind a seam**: the fragile free-text protocols live in
//!   [`parse`], swappable without touching the planner
//!
//! # Modules
//!
//! - [`planner`] - the operations: estimate, prioritize, decompose, query
//! - [`llm`] - LLM client trait and OpenAI/Anthropic implementations
//! - [`prompts`] - deterministic prompt construction
//! - [`parse`] - typed parsing of raw model text
//! - [`fallback`] - the degraded-but-well-formed defaults
//! - [`config`] - configuration types and loading
//! - [`domain`] - Task and Subtask records

pub mod config;
pub mod domain;
pub mod fallback;
pub mod llm;
pub mod parse;
pub mod planner;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use domain::{Subtask, Task};
pub use llm::{
    AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, TokenUsage,
    create_client,
};
pub use parse::ParseError;
pub use planner::{Degraded, Outcome, Planner};
pub use prompts::{Prompt, PromptBuilder};
