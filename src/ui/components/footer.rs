use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::state::TaskCounts;
use crate::theme::ThemeColors;

/// Footer 高度（含边框）
pub const FOOTER_HEIGHT: u16 = 3;

/// 渲染底部栏：左侧快捷键提示，右侧计数
pub fn render(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    counts: TaskCounts,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let counts_line = counts_line(counts, colors);
    let [hints_area, counts_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(counts_line.width() as u16),
    ])
    .areas(inner_area);

    frame.render_widget(Paragraph::new(hints_line(focus, colors)), hints_area);
    frame.render_widget(Paragraph::new(counts_line), counts_area);
}

fn counts_line(counts: TaskCounts, colors: &ThemeColors) -> Line<'static> {
    let number = Style::default()
        .fg(colors.highlight)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(colors.muted);

    Line::from(vec![
        Span::styled("Total: ", label),
        Span::styled(counts.total.to_string(), number),
        Span::styled("   Completed: ", label),
        Span::styled(counts.completed.to_string(), number),
        Span::raw(" "),
    ])
}

fn hints_line(focus: Focus, colors: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    let shortcuts = get_shortcuts(focus);

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    Line::from(spans)
}

fn get_shortcuts(focus: Focus) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Input => vec![("Enter", "add"), ("Tab", "list"), ("^C", "quit")],
        Focus::List => vec![
            ("Space", "toggle"),
            ("d", "delete"),
            ("i", "new"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}
