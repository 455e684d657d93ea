use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 列表为空时的占位提示
pub const EMPTY_MESSAGE: &str = "No tasks yet";

/// 渲染空状态（代替任务列表）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(colors.muted))),
        Line::from(vec![
            Span::styled("Type a task and press ", Style::default().fg(colors.text)),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);

    // 垂直居中
    let y_offset = inner_area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: 2.min(inner_area.height),
    };

    frame.render_widget(hint_widget, centered_area);
}
