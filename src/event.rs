use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus};
use crate::state::Command;
use crate::ui::click_areas::contains;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板：任意键关闭
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 输入框聚焦时的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交草稿
        KeyCode::Enter => app.submit_draft(),

        // 删除字符
        KeyCode::Backspace => app.backspace(),

        // 切换到列表
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.focus_list(),

        // 输入字符
        KeyCode::Char(c) => app.type_char(c),

        _ => {}
    }
}

/// 列表聚焦时的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),

        // 回到输入框
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => app.focus_input(),

        // 主题切换
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 帮助
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

/// 鼠标左键点击，命中区域来自上一帧的 ClickAreas
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    let (col, row) = (mouse.column, mouse.row);
    let areas = &app.ui.click_areas;

    let hit_add = areas.add_button.is_some_and(|r| contains(&r, col, row));
    let hit_input = areas.input_area.is_some_and(|r| contains(&r, col, row));
    let hit_checkbox = find_hit(&areas.checkboxes, col, row);
    let hit_delete = find_hit(&areas.delete_buttons, col, row);
    let hit_row = find_hit(&areas.task_rows, col, row);

    if hit_add {
        app.submit_draft();
    } else if hit_input {
        app.focus_input();
    } else if let Some(id) = hit_checkbox {
        app.dispatch(Command::ToggleTask(id));
        app.selected = app.list.position(id);
    } else if let Some(id) = hit_delete {
        app.dispatch(Command::RemoveTask(id));
    } else if let Some(index) = hit_row {
        app.selected = Some(index);
        app.focus_list();
    }
}

/// 查找包含 (col, row) 的区域对应的值
fn find_hit<T: Copy>(areas: &[(Rect, T)], col: u16, row: u16) -> Option<T> {
    areas
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|&(_, value)| value)
}
