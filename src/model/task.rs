use std::fmt;

use chrono::{DateTime, Local};

/// 任务 ID（单调递增，删除后也不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单个待办事项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// 用户输入的原始文本（不做 trim）
    pub text: String,
    pub completed: bool,
    /// 创建时间，仅用于显示
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Local::now(),
        }
    }

    /// 复选框符号
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// 列表中显示的创建时间 (HH:MM)
    pub fn created_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// 启动时预置的两个示例任务
pub fn seed_tasks() -> Vec<Task> {
    let mut learned = Task::new(TaskId(1), "Изучить React");
    learned.completed = true;
    vec![learned, Task::new(TaskId(2), "Написать To-Do приложение")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskId(7), "  buy milk ");
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.text, "  buy milk ");
        assert!(!task.completed);
        assert_eq!(task.checkbox(), "[ ]");
    }

    #[test]
    fn test_seed_tasks() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId(1));
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].checkbox(), "[x]");
        assert_eq!(tasks[1].id, TaskId(2));
        assert_eq!(tasks[1].text, "Написать To-Do приложение");
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_created_label_format() {
        let task = Task::new(TaskId(1), "x");
        let label = task.created_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.chars().nth(2), Some(':'));
    }
}
