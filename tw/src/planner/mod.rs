//! Planner - the orchestration layer over prompts, gateway, and parsing
//!
//! Four operations: estimate, prioritize, decompose, query. Each composes
//! PromptBuilder -> LlmClient -> parse, and on any failure terminates in the
//! fallback policy's default instead of raising. The planner holds no
//! mutable state; concurrent invocations are independent.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, warn};

use crate::domain::{Subtask, Task};
use crate::fallback;
use crate::llm::{CompletionRequest, LlmClient};
use crate::parse;
use crate::prompts::{Prompt, PromptBuilder};

mod outcome;

pub use outcome::{Degraded, Outcome};

/// Temperature for estimate and prioritize: short, constrained answers
const RANKING_TEMPERATURE: f32 = 0.3;

/// Temperature for decompose and query: open-ended generation
const BREAKDOWN_TEMPERATURE: f32 = 0.7;

/// Token budget for an estimate: only a short numeric answer is expected
const ESTIMATE_MAX_TOKENS: u32 = 10;

/// Default token budget for a ranking response
const RANKING_MAX_TOKENS: u32 = 1024;

/// Token budget for a goal breakdown
const BREAKDOWN_MAX_TOKENS: u32 = 300;

/// Default token budget for a free-text answer
const ANSWER_MAX_TOKENS: u32 = 1024;

/// Orchestrates the AI planning operations
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    prompts: PromptBuilder,
}

impl Planner {
    /// Fails only if the prompt templates do not register cleanly
    pub fn new(llm: Arc<dyn LlmClient>) -> Result<Self> {
        Ok(Self {
            llm,
            prompts: PromptBuilder::new()?,
        })
    }

    /// Estimate hours needed for a task
    ///
    /// Returns a value in [0.5, 40]; 2.0 when the gateway or parsing fails.
    pub async fn estimate(&self, title: &str, description: &str) -> Outcome<f64> {
        debug!(%title, "estimate: called");
        let prompt = self.prompts.estimate(title, description);

        let content = match self.invoke(prompt, RANKING_TEMPERATURE, ESTIMATE_MAX_TOKENS).await {
            Ok(content) => content,
            Err(outcome) => return outcome.map_value(|_| fallback::DEFAULT_ESTIMATE_HOURS),
        };

        match parse::parse_hours(&content) {
            Ok(hours) => Outcome::ok(fallback::clamp_hours(hours)),
            Err(e) => {
                warn!(%title, error = %e, "estimate: unparseable response, using default");
                Outcome::degraded(fallback::DEFAULT_ESTIMATE_HOURS, e)
            }
        }
    }

    /// Rank tasks by urgency, importance, and due dates
    ///
    /// On success every task's priority is rewritten from the model's
    /// ranking (999 for titles the ranking omitted) and the tasks come back
    /// sorted ascending by priority, stably. On any failure the input comes
    /// back unmodified: same order, same priority values.
    pub async fn prioritize(&self, mut tasks: Vec<Task>) -> Outcome<Vec<Task>> {
        debug!(task_count = tasks.len(), "prioritize: called");
        if tasks.is_empty() {
            return Outcome::ok(tasks);
        }

        let prompt = self.prompts.prioritize(&tasks);

        let content = match self.invoke(prompt, RANKING_TEMPERATURE, RANKING_MAX_TOKENS).await {
            Ok(content) => content,
            Err(outcome) => return outcome.map_value(|_| tasks),
        };

        let ranks = match parse::parse_ranking(&content) {
            Ok(ranks) => ranks,
            Err(e) => {
                warn!(error = %e, "prioritize: unparseable ranking, returning input order");
                return Outcome::degraded(tasks, e);
            }
        };

        for task in &mut tasks {
            task.priority = ranks
                .get(&task.title)
                .copied()
                .unwrap_or(fallback::UNRANKED_PRIORITY);
        }

        // Stable: tasks tied at the sentinel keep their original relative order
        tasks.sort_by_key(|task| task.priority);

        Outcome::ok(tasks)
    }

    /// Break a goal down into subtasks, each with its own estimate
    ///
    /// Per-subtask estimates run concurrently; result order follows the
    /// model's line order, not completion time. Never returns an empty
    /// list: total failure yields the single placeholder entry.
    pub async fn decompose(&self, goal: &str) -> Outcome<Vec<Subtask>> {
        debug!(%goal, "decompose: called");
        let prompt = self.prompts.decompose(goal);

        let content = match self.invoke(prompt, BREAKDOWN_TEMPERATURE, BREAKDOWN_MAX_TOKENS).await {
            Ok(content) => content,
            Err(outcome) => return outcome.map_value(|_| fallback::placeholder_subtasks()),
        };

        let titles = match parse::parse_subtasks(&content) {
            Ok(titles) => titles,
            Err(e) => {
                warn!(%goal, error = %e, "decompose: no usable subtask lines, using placeholder");
                return Outcome::degraded(fallback::placeholder_subtasks(), e);
            }
        };

        let estimates = futures::future::join_all(titles.iter().map(|title| self.estimate(title, ""))).await;

        let subtasks = titles
            .into_iter()
            .zip(estimates)
            .enumerate()
            .map(|(idx, (title, estimate))| Subtask {
                title,
                estimated_hours: estimate.into_value(),
                priority: idx as i32,
            })
            .collect();

        Outcome::ok(subtasks)
    }

    /// Answer a free-text question about the given tasks
    ///
    /// The whole task list rides along as context. Always answers a call,
    /// even over an empty list; on failure the caller gets the fixed
    /// apology reply instead of an error.
    pub async fn query(&self, tasks: &[Task], question: &str) -> Outcome<String> {
        debug!(task_count = tasks.len(), "query: called");
        let prompt = self.prompts.query(tasks, question);

        let content = match self.invoke(prompt, BREAKDOWN_TEMPERATURE, ANSWER_MAX_TOKENS).await {
            Ok(content) => content,
            Err(outcome) => return outcome.map_value(|_| fallback::QUERY_FALLBACK.to_string()),
        };

        match parse::parse_answer(&content) {
            Ok(answer) => Outcome::ok(answer),
            Err(e) => {
                warn!(error = %e, "query: empty answer, using fallback reply");
                Outcome::degraded(fallback::QUERY_FALLBACK.to_string(), e)
            }
        }
    }

    /// One gateway call; a missing content body counts as empty text
    ///
    /// Takes the prompt still wrapped in its render result so a template
    /// failure lands on the same degraded path as a gateway failure, with
    /// no call made. Err carries a degraded unit outcome so callers can
    /// substitute their own fallback value while keeping the cause.
    async fn invoke(&self, prompt: Result<Prompt>, temperature: f32, max_tokens: u32) -> Result<String, Outcome<()>> {
        let prompt = match prompt {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "invoke: prompt render failed");
                return Err(Outcome::degraded((), Degraded::Prompt(e)));
            }
        };

        let request = CompletionRequest {
            system_prompt: prompt.system.to_string(),
            user_content: prompt.user,
            temperature,
            max_tokens,
        };

        match self.llm.complete(request).await {
            Ok(response) => Ok(response.content.unwrap_or_default()),
            Err(e) => {
                warn!(error = %e, "invoke: gateway call failed");
                Err(Outcome::degraded((), e))
            }
        }
    }
}

impl<T> Outcome<T> {
    /// Replace the value, keeping the degradation cause
    fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            degraded: self.degraded,
        }
    }
}
