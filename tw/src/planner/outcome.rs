//! Typed operation outcomes
//!
//! Planner operations never raise: the caller always gets a usable value.
//! When a fallback engaged, the cause rides along so higher layers can log
//! or alert on degraded mode instead of silently serving defaults.

use thiserror::Error;

use crate::llm::LlmError;
use crate::parse::ParseError;

/// Why an operation fell back to its default
#[derive(Debug, Error)]
pub enum Degraded {
    /// The model gateway failed (network, auth, rate limit, service error)
    #[error("model gateway failure: {0}")]
    Gateway(#[from] LlmError),

    /// The model answered, but the text did not match the expected shape
    #[error("response parse failure: {0}")]
    Parse(#[from] ParseError),

    /// The prompt could not be rendered; no gateway call was made
    #[error("prompt render failure: {0}")]
    Prompt(eyre::Report),
}

/// A planner result: always a value, optionally a degradation cause
#[derive(Debug)]
pub struct Outcome<T> {
    /// The structured result; a fallback default when `degraded` is set
    pub value: T,

    /// Present when a fallback engaged
    pub degraded: Option<Degraded>,
}

impl<T> Outcome<T> {
    /// A fully successful outcome
    pub fn ok(value: T) -> Self {
        Self { value, degraded: None }
    }

    /// A fallback outcome carrying its cause
    pub fn degraded(value: T, cause: impl Into<Degraded>) -> Self {
        Self {
            value,
            degraded: Some(cause.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// Discard the degradation cause, keeping only the value
    pub fn into_value(self) -> T {
        self.value
    }
}
