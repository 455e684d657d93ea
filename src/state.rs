//! 任务列表状态
//!
//! `TaskList` 独占任务序列和草稿文本，所有变更都经由 [`TaskList::apply`]
//! 这一个 reducer。任何操作都不会失败：空草稿被静默拒绝，未知 id 是 no-op。

use tracing::debug;

use crate::model::{seed_tasks, Task, TaskId};

/// 对任务列表的全部操作（封闭集合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetDraft(String),
    AddTask,
    ToggleTask(TaskId),
    RemoveTask(TaskId),
}

/// 一次 `apply` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 状态已变更；`AddTask` 会带上新任务的 id
    Changed(Option<TaskId>),
    /// 没有任何变化（空草稿、未知 id）
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }
}

/// 派生计数，每次渲染时重新计算，不作为状态存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    draft: String,
    next_id: u64,
}

impl TaskList {
    /// 带两个示例任务的初始状态
    pub fn seeded() -> Self {
        Self::with_tasks(seed_tasks())
    }

    pub fn empty() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// 从已有任务构建；id 分配从现有最大 id 之后开始
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self {
            tasks,
            draft: String::new(),
            next_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// 唯一的状态变更入口
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetDraft(text) => {
                if self.draft == text {
                    return Outcome::Unchanged;
                }
                self.set_draft(text);
                Outcome::Changed(None)
            }
            Command::AddTask => match self.add_task() {
                Some(id) => Outcome::Changed(Some(id)),
                None => Outcome::Unchanged,
            },
            Command::ToggleTask(id) => {
                if self.toggle_task(id) {
                    Outcome::Changed(None)
                } else {
                    Outcome::Unchanged
                }
            }
            Command::RemoveTask(id) => {
                if self.remove_task(id) {
                    Outcome::Changed(None)
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    /// 替换草稿，不做任何校验
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// 将草稿转为新任务
    ///
    /// 只用 trim 后的文本判断是否为空，保存的是原始草稿。
    /// 草稿为空白时不改变任何状态（包括草稿本身）。
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let text = std::mem::take(&mut self.draft);
        debug!(%id, text = %text, "task added");
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// 翻转指定任务的完成状态，返回是否找到
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// 删除指定任务，其余任务保持原有顺序
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(%id, "task removed");
        }
        removed
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &TaskList) -> Vec<u64> {
        list.tasks().iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_add_task_appends_and_clears_draft() {
        let mut list = TaskList::seeded();
        list.set_draft("Buy milk");
        let id = list.add_task().unwrap();

        assert_eq!(list.tasks().len(), 3);
        let last = list.tasks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);
        assert_eq!(list.draft(), "");
    }

    #[test]
    fn test_add_task_keeps_raw_text() {
        let mut list = TaskList::empty();
        list.set_draft("  padded  ");
        list.add_task();
        assert_eq!(list.tasks()[0].text, "  padded  ");
    }

    #[test]
    fn test_add_task_rejects_blank_draft() {
        for draft in ["", " ", "\t\n  "] {
            let mut list = TaskList::seeded();
            let before = list.tasks().to_vec();
            list.set_draft(draft);

            assert_eq!(list.add_task(), None);
            assert_eq!(list.tasks(), before.as_slice());
            assert_eq!(list.draft(), draft);
        }
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = TaskList::empty();
        list.set_draft("a");
        let a = list.add_task().unwrap();
        assert_eq!(a, TaskId(1));

        list.remove_task(a);
        list.set_draft("b");
        let b = list.add_task().unwrap();
        assert_eq!(b, TaskId(2));
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TaskList::seeded();
        list.set_draft("third");
        list.add_task();
        let before = list.tasks().to_vec();

        assert!(list.toggle_task(TaskId(2)));
        for (old, new) in before.iter().zip(list.tasks()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.text, new.text);
            if old.id == TaskId(2) {
                assert_eq!(new.completed, !old.completed);
            } else {
                assert_eq!(new.completed, old.completed);
            }
        }

        assert!(list.toggle_task(TaskId(2)));
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut list = TaskList::seeded();
        let before = list.tasks().to_vec();

        assert!(!list.toggle_task(TaskId(99)));
        assert!(!list.remove_task(TaskId(99)));
        assert_eq!(list.tasks(), before.as_slice());

        assert_eq!(list.apply(Command::ToggleTask(TaskId(99))), Outcome::Unchanged);
        assert_eq!(list.apply(Command::RemoveTask(TaskId(99))), Outcome::Unchanged);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TaskList::seeded();
        for text in ["c", "d"] {
            list.set_draft(text);
            list.add_task();
        }
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);

        assert!(list.remove_task(TaskId(2)));
        assert_eq!(ids(&list), vec![1, 3, 4]);
        assert!(list.get(TaskId(2)).is_none());
    }

    #[test]
    fn test_counts_track_completed() {
        let mut list = TaskList::empty();
        assert_eq!(list.counts(), TaskCounts::default());

        for text in ["a", "b", "c"] {
            list.set_draft(text);
            list.add_task();
        }
        list.toggle_task(TaskId(1));
        list.toggle_task(TaskId(3));

        let counts = list.counts();
        assert_eq!(counts.total, list.tasks().len());
        assert_eq!(counts.completed, 2);
    }

    #[test]
    fn test_apply_set_draft() {
        let mut list = TaskList::empty();
        assert_eq!(
            list.apply(Command::SetDraft("hello".to_string())),
            Outcome::Changed(None)
        );
        assert_eq!(list.draft(), "hello");
        assert_eq!(
            list.apply(Command::SetDraft("hello".to_string())),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_seeded_scenario() {
        let mut list = TaskList::seeded();

        list.apply(Command::SetDraft("Test".to_string()));
        let outcome = list.apply(Command::AddTask);
        assert_eq!(outcome, Outcome::Changed(Some(TaskId(3))));
        assert_eq!(list.tasks().len(), 3);
        assert_eq!(list.tasks()[2].text, "Test");
        assert!(!list.tasks()[2].completed);
        assert_eq!(list.counts(), TaskCounts { total: 3, completed: 1 });

        assert!(list.apply(Command::ToggleTask(TaskId(2))).is_changed());
        assert!(list.get(TaskId(2)).unwrap().completed);
        assert_eq!(list.counts().completed, 2);

        assert!(list.apply(Command::RemoveTask(TaskId(1))).is_changed());
        assert_eq!(ids(&list), vec![2, 3]);
        // 被删除的任务 1 本身已完成，剩下的只有任务 2 完成
        assert_eq!(list.counts(), TaskCounts { total: 2, completed: 1 });
    }
}
