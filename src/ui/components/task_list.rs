use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

use super::truncate;

const DELETE_BUTTON: &str = " ✕ ";

/// 每行的列宽：选择器、复选框、文本、时间、删除按钮
const ROW_COLUMNS: [Constraint; 5] = [
    Constraint::Length(2),
    Constraint::Length(4),
    Constraint::Fill(1),
    Constraint::Length(6),
    Constraint::Length(3),
];

/// 任务文本样式：已完成的任务加删除线并置灰
pub fn text_style(task: &Task, colors: &ThemeColors) -> Style {
    if task.completed {
        Style::default()
            .fg(colors.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors.text)
    }
}

/// 保证选中行可见的滚动偏移
fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
    match selected {
        Some(i) if visible_rows > 0 && i >= visible_rows => i + 1 - visible_rows,
        _ => 0,
    }
}

/// 渲染任务列表，并登记每行的复选框与删除按钮区域
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    list_focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = inner_area.height as usize;
    let offset = scroll_offset(selected, visible_rows);

    for (row, (index, task)) in tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .enumerate()
    {
        let row_area = Rect {
            y: inner_area.y + row as u16,
            height: 1,
            ..inner_area
        };
        let is_selected = selected == Some(index);

        // 选中行背景（列表获得焦点时才高亮）
        if is_selected && list_focused {
            frame.render_widget(
                Block::default().style(Style::default().bg(colors.bg_secondary)),
                row_area,
            );
        }

        let [selector_area, checkbox_area, text_area, time_area, delete_area] =
            Layout::horizontal(ROW_COLUMNS).areas(row_area);

        let selector = if is_selected { "❯" } else { " " };
        frame.render_widget(
            Paragraph::new(Span::styled(selector, Style::default().fg(colors.highlight))),
            selector_area,
        );

        let checkbox_style = if task.completed {
            Style::default().fg(colors.done).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(task.checkbox(), checkbox_style)),
            checkbox_area,
        );

        let max_len = (text_area.width as usize).saturating_sub(1).max(1);
        let mut style = text_style(task, colors);
        if is_selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(truncate(&task.text, max_len), style)),
            text_area,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                task.created_label(),
                Style::default().fg(colors.muted),
            )),
            time_area,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(DELETE_BUTTON, Style::default().fg(colors.danger))),
            delete_area,
        );

        click_areas.task_rows.push((row_area, index));
        click_areas.checkboxes.push((
            Rect {
                width: 3.min(checkbox_area.width),
                ..checkbox_area
            },
            task.id,
        ));
        click_areas.delete_buttons.push((delete_area, task.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 3), 7);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }
}
