//! Domain types shared across the planning core

mod task;

pub use task::{Subtask, Task};
