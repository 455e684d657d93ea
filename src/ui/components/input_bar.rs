//! 新任务输入框 + 提交按钮

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 输入框高度（含边框）
pub const INPUT_HEIGHT: u16 = 3;

const ADD_BUTTON: &str = "[ Add ]";
const PLACEHOLDER: &str = "What needs to be done?";
const PROMPT: &str = "  › ";

/// 草稿超出可用宽度时只保留末尾部分（前面加省略号），保证光标可见
fn visible_tail(draft: &str, width: usize) -> String {
    let len = draft.chars().count();
    if len <= width {
        return draft.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let keep = width - 1;
    let tail: String = draft.chars().skip(len - keep).collect();
    format!("…{}", tail)
}

/// 渲染输入框，并登记输入区与按钮的点击区域
pub fn render(
    frame: &mut Frame,
    area: Rect,
    draft: &str,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, button_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(ADD_BUTTON.len() as u16 + 1),
    ])
    .areas(inner_area);

    // 输入行: "  › {draft}█"
    let mut spans = vec![Span::styled(PROMPT, Style::default().fg(colors.muted))];
    if draft.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    } else {
        // 提示符和光标之外剩下的宽度
        let available = (text_area.width as usize).saturating_sub(PROMPT.chars().count() + 1);
        spans.push(Span::styled(
            visible_tail(draft, available),
            Style::default().fg(colors.text),
        ));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

    // 草稿为空白时按钮置灰（点击仍是 no-op）
    let button_style = if draft.trim().is_empty() {
        Style::default().fg(colors.muted)
    } else {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(ADD_BUTTON, button_style)),
        button_area,
    );

    click_areas.input_area = Some(text_area);
    click_areas.add_button = Some(Rect {
        width: (ADD_BUTTON.len() as u16).min(button_area.width),
        ..button_area
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("short", 10), "short");
        assert_eq!(visible_tail("abcdef", 6), "abcdef");
        assert_eq!(visible_tail("abcdefgh", 4), "…fgh");
        assert_eq!(visible_tail("Написать", 4), "…сать");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
