//! tasklist 统一错误类型定义
//!
//! 任务操作本身不会失败；这里只覆盖配置文件、日志文件和终端 I/O。

use std::io;
use thiserror::Error;

/// tasklist 错误类型
#[derive(Debug, Error)]
pub enum TaskListError {
    /// I/O 错误（配置读写、日志文件、终端）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// tasklist Result 类型别名
pub type Result<T> = std::result::Result<T, TaskListError>;

impl TaskListError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<TaskListError> for io::Error {
    fn from(err: TaskListError) -> Self {
        match err {
            TaskListError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
