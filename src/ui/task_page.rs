use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Focus};

use super::components::{empty_state, footer, header, help_panel, input_bar, task_list, toast};

/// 渲染主页面：标题、输入框、任务列表（或空状态）、计数栏
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_bar::INPUT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(footer::FOOTER_HEIGHT),
    ])
    .areas(area);

    header::render(frame, header_area, app.focus, &colors);

    input_bar::render(
        frame,
        input_area,
        app.list.draft(),
        app.focus == Focus::Input,
        &colors,
        &mut app.ui.click_areas,
    );

    // 渲染列表或空状态
    let tasks = app.list.tasks();
    if tasks.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            tasks,
            app.selected,
            app.focus == Focus::List,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    // 计数每帧重新计算
    footer::render(frame, footer_area, app.focus, app.list.counts(), &colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
