use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::theme::ThemeColors;

/// Header 总高度：上边框 + 标题行
pub const HEADER_HEIGHT: u16 = 2;

/// 渲染顶部标题栏（标题 + 当前焦点提示）
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " ✓ Task List",
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let right = Span::styled(
        match focus {
            Focus::Input => "typing ",
            Focus::List => "browsing ",
        },
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let total_width = inner_area.width as usize;
    let used_width = left.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}
