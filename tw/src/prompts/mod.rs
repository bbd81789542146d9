//! Prompt construction for the planning operations
//!
//! Building a prompt is pure: same inputs produce the same instruction and
//! content text, with no I/O and no hidden state. System instructions live
//! in embedded .pmt files; user content is rendered with handlebars from
//! typed context structs. Templates are registered once at construction
//! with strict mode on, so a context missing a field fails loudly instead
//! of rendering a hole.

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::domain::Task;

pub mod embedded;

/// Due-date rendering for tasks without one
const NO_DUE_DATE: &str = "No due date";

// User-content templates, one per operation
const ESTIMATE_TEMPLATE: &str = "Task: {{title}}\nDescription: {{description}}\nEstimate hours needed:";
const PRIORITIZE_TEMPLATE: &str = "Prioritize these tasks:\n{{task_list}}";
const DECOMPOSE_TEMPLATE: &str = "Break down this goal into subtasks: {{goal}}";
const QUERY_TEMPLATE: &str = "User tasks:\n{{task_list}}\n\nQuestion: {{question}}";

#[derive(Debug, Clone, Serialize)]
struct EstimateContext<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct TaskListContext {
    task_list: String,
}

#[derive(Debug, Clone, Serialize)]
struct DecomposeContext<'a> {
    goal: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct QueryContext<'a> {
    task_list: String,
    question: &'a str,
}

/// An instruction/content pair ready for one gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instruction fixing the model's role and output contract
    pub system: &'static str,

    /// User content for this call
    pub user: String,
}

/// Renders deterministic prompts for estimate, prioritize, decompose, and query
pub struct PromptBuilder {
    hbs: Handlebars<'static>,
}

impl PromptBuilder {
    /// Register the user-content templates; strict mode, no HTML escaping
    pub fn new() -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            ("estimate", ESTIMATE_TEMPLATE),
            ("prioritize", PRIORITIZE_TEMPLATE),
            ("decompose", DECOMPOSE_TEMPLATE),
            ("query", QUERY_TEMPLATE),
        ] {
            hbs.register_template_string(name, template)
                .map_err(|e| eyre!("Failed to register template {}: {}", name, e))?;
        }

        Ok(Self { hbs })
    }

    fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String> {
        self.hbs
            .render(name, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", name, e))
    }

    /// Estimation prompt: title plus optional description
    pub fn estimate(&self, title: &str, description: &str) -> Result<Prompt> {
        debug!(%title, "estimate: building prompt");
        let user = self.render("estimate", &EstimateContext { title, description })?;
        Ok(Prompt {
            system: embedded::ESTIMATE,
            user,
        })
    }

    /// Ranking prompt: one "title (Due: ...)" line per task, in input order
    pub fn prioritize(&self, tasks: &[Task]) -> Result<Prompt> {
        debug!(task_count = tasks.len(), "prioritize: building prompt");
        let task_list = tasks
            .iter()
            .map(|task| format!("- {} (Due: {})", task.title, format_due(task)))
            .collect::<Vec<_>>()
            .join("\n");

        let user = self.render("prioritize", &TaskListContext { task_list })?;
        Ok(Prompt {
            system: embedded::PRIORITIZE,
            user,
        })
    }

    /// Breakdown prompt for a free-text goal
    pub fn decompose(&self, goal: &str) -> Result<Prompt> {
        debug!(goal_len = goal.len(), "decompose: building prompt");
        let user = self.render("decompose", &DecomposeContext { goal })?;
        Ok(Prompt {
            system: embedded::DECOMPOSE,
            user,
        })
    }

    /// Question-answering prompt: full task context plus the user's question
    ///
    /// Unlike the ranking lines, the context here carries priority and
    /// completion state so the model can reason about the whole list.
    pub fn query(&self, tasks: &[Task], question: &str) -> Result<Prompt> {
        debug!(task_count = tasks.len(), "query: building prompt");
        let task_list = tasks
            .iter()
            .map(|task| {
                format!(
                    "- {} (Priority: {}, Due: {}, Completed: {})",
                    task.title,
                    task.priority,
                    format_due(task),
                    task.completed
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let user = self.render("query", &QueryContext { task_list, question })?;
        Ok(Prompt {
            system: embedded::QUERY,
            user,
        })
    }
}

fn format_due(task: &Task) -> String {
    task.due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_DUE_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn builder() -> PromptBuilder {
        PromptBuilder::new().unwrap()
    }

    #[test]
    fn test_estimate_prompt() {
        let prompt = builder().estimate("Write unit tests", "Cover the parser").unwrap();

        assert!(prompt.system.contains("only a number"));
        assert_eq!(
            prompt.user,
            "Task: Write unit tests\nDescription: Cover the parser\nEstimate hours needed:"
        );
    }

    #[test]
    fn test_estimate_prompt_empty_description() {
        let prompt = builder().estimate("Write unit tests", "").unwrap();
        assert!(prompt.user.contains("Description: \n"));
    }

    #[test]
    fn test_rendering_does_not_escape_html() {
        let prompt = builder().estimate("Review & merge <PR>", "it's urgent").unwrap();
        assert!(prompt.user.contains("Review & merge <PR>"));
        assert!(prompt.user.contains("it's urgent"));
    }

    #[test]
    fn test_prioritize_prompt_due_dates() {
        let due = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let tasks = vec![Task::new("Ship release").with_due_date(due), Task::new("Write docs")];

        let prompt = builder().prioritize(&tasks).unwrap();

        assert_eq!(
            prompt.user,
            "Prioritize these tasks:\n- Ship release (Due: 2026-09-01)\n- Write docs (Due: No due date)"
        );
        assert!(prompt.system.contains("one per line"));
    }

    #[test]
    fn test_prioritize_prompt_preserves_input_order() {
        let tasks = vec![Task::new("C"), Task::new("A"), Task::new("B")];
        let prompt = builder().prioritize(&tasks).unwrap();

        let c = prompt.user.find("- C").unwrap();
        let a = prompt.user.find("- A").unwrap();
        let b = prompt.user.find("- B").unwrap();
        assert!(c < a && a < b);
    }

    #[test]
    fn test_decompose_prompt() {
        let prompt = builder().decompose("Launch a product").unwrap();

        assert_eq!(prompt.user, "Break down this goal into subtasks: Launch a product");
        assert!(prompt.system.contains("3-8"));
    }

    #[test]
    fn test_query_prompt_task_context() {
        let due = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let mut done = Task::new("Ship release").with_due_date(due);
        done.priority = 1;
        done.completed = true;
        let tasks = vec![done, Task::new("Write docs")];

        let prompt = builder().query(&tasks, "What should I do next?").unwrap();

        assert_eq!(
            prompt.user,
            "User tasks:\n\
             - Ship release (Priority: 1, Due: 2026-09-01, Completed: true)\n\
             - Write docs (Priority: 0, Due: No due date, Completed: false)\n\n\
             Question: What should I do next?"
        );
        assert!(prompt.system.contains("task management assistant"));
    }

    #[test]
    fn test_query_prompt_no_tasks() {
        let prompt = builder().query(&[], "Am I free today?").unwrap();
        assert_eq!(prompt.user, "User tasks:\n\n\nQuestion: Am I free today?");
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let b = builder();
        let a = b.decompose("Launch a product").unwrap();
        let c = b.decompose("Launch a product").unwrap();
        assert_eq!(a, c);
    }
}
