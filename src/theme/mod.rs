mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::Dracula, Theme::Nord]
    }

    /// 从名称创建主题（用于配置加载，大小写不敏感）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
    }

    /// 循环切换到下一个主题
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Dark => dark_colors(),
            Theme::Light => light_colors(),
            Theme::Dracula => dracula_colors(),
            Theme::Nord => nord_colors(),
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键、光标）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务的复选框
    pub done: Color,
    /// 删除按钮
    pub danger: Color,
}
