//! # Relkit - 应用发布准备统一工具箱
//!
//! 将分散的打包辅助脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `icons`   - 从品牌 logo 批量生成各密度的启动图标
//! - `rewrite` - 发布前批量替换源码树中的接口地址
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批处理核心)
//!   │     └── transforms/(领域变换)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod transforms;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
