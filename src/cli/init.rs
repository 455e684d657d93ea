use std::path::Path;

use crate::storage::config;

/// 执行 `tasklist init`：写入默认配置文件
pub fn execute(path: &Path, force: bool) {
    match config::init_config(path, force) {
        Ok(()) => println!("Wrote default config to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
