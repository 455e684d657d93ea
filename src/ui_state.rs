//! UI 状态管理
//!
//! 管理与显示相关的状态：主题、颜色、Toast、点击区域。不影响任务语义。

use std::time::{Duration, Instant};

use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: theme.colors(),
            click_areas: ClickAreas::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = theme.colors();
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let mut ui = UiState::new(Theme::Dark);
        ui.show_toast("hello", Duration::from_secs(60));
        ui.clear_expired_toast();
        assert!(ui.toast.is_some());

        ui.show_toast("bye", Duration::ZERO);
        ui.clear_expired_toast();
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_set_theme_updates_colors() {
        let mut ui = UiState::new(Theme::Dark);
        ui.set_theme(Theme::Nord);
        assert_eq!(ui.theme, Theme::Nord);
        assert_eq!(ui.colors, Theme::Nord.colors());
    }
}
