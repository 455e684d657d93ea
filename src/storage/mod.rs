pub mod config;

use std::path::PathBuf;

/// 获取 ~/.tasklist/ 目录路径
pub fn tasklist_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tasklist")
}

/// 日志文件路径: ~/.tasklist/tasklist.log
pub fn log_path() -> PathBuf {
    tasklist_dir().join("tasklist.log")
}
