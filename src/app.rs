use std::time::Duration;

use tracing::info;

use crate::model::TaskId;
use crate::state::{Command, Outcome, TaskList};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 输入框：字符进入草稿
    #[default]
    Input,
    /// 任务列表：导航、切换、删除
    List,
}

/// 全局应用状态
pub struct App {
    /// 任务列表（唯一的业务状态）
    pub list: TaskList,
    /// 当前焦点
    pub focus: Focus,
    /// 列表中选中的行
    pub selected: Option<usize>,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 是否应该退出
    pub should_quit: bool,
    /// UI 状态
    pub ui: UiState,
}

impl App {
    pub fn new(list: TaskList, theme: Theme) -> Self {
        let selected = if list.tasks().is_empty() { None } else { Some(0) };
        Self {
            list,
            focus: Focus::default(),
            selected,
            show_help: false,
            should_quit: false,
            ui: UiState::new(theme),
        }
    }

    /// 执行一条命令，并在任务增删后修正选中行
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = self.list.apply(command);
        if outcome.is_changed() {
            self.clamp_selection();
        }
        outcome
    }

    /// 在草稿末尾追加一个字符
    pub fn type_char(&mut self, c: char) {
        let mut draft = self.list.draft().to_string();
        draft.push(c);
        self.dispatch(Command::SetDraft(draft));
    }

    /// 删除草稿最后一个字符
    pub fn backspace(&mut self) {
        let mut draft = self.list.draft().to_string();
        if draft.pop().is_some() {
            self.dispatch(Command::SetDraft(draft));
        }
    }

    /// 提交草稿；成功后选中新任务
    pub fn submit_draft(&mut self) {
        if let Outcome::Changed(Some(id)) = self.dispatch(Command::AddTask) {
            self.selected = self.list.position(id);
        }
    }

    /// 当前选中任务的 id
    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected
            .and_then(|i| self.list.tasks().get(i))
            .map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.dispatch(Command::ToggleTask(id));
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.dispatch(Command::RemoveTask(id));
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.list.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.list.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.selected = Some(prev);
    }

    /// 保证选中行落在列表范围内
    pub fn clamp_selection(&mut self) {
        let len = self.list.tasks().len();
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.clamp_selection();
    }

    /// 循环切换主题并提示
    pub fn cycle_theme(&mut self) {
        let theme = self.ui.theme.next();
        self.ui.set_theme(theme);
        info!(theme = theme.label(), "theme changed");
        self.ui
            .show_toast(format!("Theme: {}", theme.label()), TOAST_DURATION);
    }

    /// 更新 Toast 状态（清除过期的）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_first_task() {
        let app = App::new(TaskList::seeded(), Theme::Dark);
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.selected_id(), Some(TaskId(1)));
        assert_eq!(app.focus, Focus::Input);

        let app = App::new(TaskList::empty(), Theme::Dark);
        assert_eq!(app.selected, None);
        assert_eq!(app.selected_id(), None);
    }

    #[test]
    fn test_submit_selects_new_task() {
        let mut app = App::new(TaskList::seeded(), Theme::Dark);
        app.list.set_draft("Test");
        app.submit_draft();
        assert_eq!(app.selected, Some(2));
        assert_eq!(app.selected_id(), Some(TaskId(3)));
    }

    #[test]
    fn test_submit_blank_keeps_selection() {
        let mut app = App::new(TaskList::seeded(), Theme::Dark);
        app.selected = Some(1);
        app.list.set_draft("   ");
        app.submit_draft();
        assert_eq!(app.selected, Some(1));
        assert_eq!(app.list.tasks().len(), 2);
    }

    #[test]
    fn test_remove_last_row_clamps_selection() {
        let mut app = App::new(TaskList::seeded(), Theme::Dark);
        app.selected = Some(1);
        app.remove_selected();
        assert_eq!(app.selected, Some(0));
        app.remove_selected();
        assert_eq!(app.selected, None);
        assert!(app.list.tasks().is_empty());

        // 空列表上的操作是 no-op
        app.toggle_selected();
        app.remove_selected();
        app.select_next();
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_typing_edits_draft() {
        let mut app = App::new(TaskList::empty(), Theme::Dark);
        for c in "tea".chars() {
            app.type_char(c);
        }
        app.backspace();
        assert_eq!(app.list.draft(), "te");
        app.backspace();
        app.backspace();
        app.backspace();
        assert_eq!(app.list.draft(), "");
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::new(TaskList::seeded(), Theme::Dark);
        app.select_previous();
        assert_eq!(app.selected, Some(1));
        app.select_next();
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_cycle_theme_shows_toast() {
        let mut app = App::new(TaskList::empty(), Theme::Dark);
        app.cycle_theme();
        assert_eq!(app.ui.theme, Theme::Light);
        assert_eq!(app.ui.toast.as_ref().unwrap().message, "Theme: Light");
    }
}
