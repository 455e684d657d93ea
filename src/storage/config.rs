//! 应用配置持久化
//!
//! 只保存界面偏好；任务本身从不落盘。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::tasklist_dir;
use crate::error::{Result, TaskListError};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
}

fn default_theme_name() -> String {
    "Dark".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

/// 列表配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// 启动时是否带上示例任务
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

fn default_seed_examples() -> bool {
    true
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            seed_examples: default_seed_examples(),
        }
    }
}

/// 日志配置（RUST_LOG 未设置时使用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 默认配置文件路径: ~/.tasklist/config.toml
pub fn config_path() -> PathBuf {
    tasklist_dir().join("config.toml")
}

/// 从指定路径加载配置
///
/// 文件不存在返回默认值；内容无法解析时返回错误，由调用方决定是否回退。
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 加载配置，失败时回退到默认值
///
/// 错误原样交还给调用方，让它在日志初始化之后再记录。
pub fn load_or_default(path: &Path) -> (Config, Option<TaskListError>) {
    match load_config_from(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// 保存配置到指定路径（自动创建父目录）
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// 写入默认配置；已存在且未指定 force 时报错
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(TaskListError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_config_to(path, &Config::default())
}
