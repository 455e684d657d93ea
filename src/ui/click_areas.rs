use ratatui::layout::Rect;

use crate::model::TaskId;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务行 (区域, 行索引)
    pub task_rows: Vec<(Rect, usize)>,
    /// 复选框 (区域, 任务 id)
    pub checkboxes: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, 任务 id)
    pub delete_buttons: Vec<(Rect, TaskId)>,
    /// 输入框区域（点击聚焦）
    pub input_area: Option<Rect>,
    /// 提交按钮
    pub add_button: Option<Rect>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.task_rows.clear();
        self.checkboxes.clear();
        self.delete_buttons.clear();
        self.input_area = None;
        self.add_button = None;
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 1);
        assert!(contains(&rect, 2, 3));
        assert!(contains(&rect, 5, 3));
        assert!(!contains(&rect, 6, 3));
        assert!(!contains(&rect, 2, 4));
        assert!(!contains(&rect, 1, 3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut areas = ClickAreas::default();
        areas.task_rows.push((Rect::new(0, 0, 1, 1), 0));
        areas.checkboxes.push((Rect::new(0, 0, 1, 1), TaskId(1)));
        areas.add_button = Some(Rect::new(0, 0, 1, 1));
        areas.reset();
        assert!(areas.task_rows.is_empty());
        assert!(areas.checkboxes.is_empty());
        assert!(areas.add_button.is_none());
    }
}
