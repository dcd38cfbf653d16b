//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `icons`: 批量生成启动图标
//! - `rewrite`: 批量替换接口地址
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: icons, rewrite

pub mod icons;
pub mod rewrite;

use clap::{Parser, Subcommand};

/// Relkit - 应用发布准备统一工具箱
#[derive(Parser)]
#[command(name = "relkit")]
#[command(version)]
#[command(about = "A unified app release preparation toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate launcher icon variants from a source logo
    Icons(icons::IconsArgs),

    /// Rewrite a hard-coded endpoint string across a source tree
    Rewrite(rewrite::RewriteArgs),
}
