pub mod task;

pub use task::{seed_tasks, Task, TaskId};
