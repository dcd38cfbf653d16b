//! # 批处理模块
//!
//! 提供统一的资源批量变换能力。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 逐条处理，单条失败不影响其余条目
//! - 进度反馈与统计汇总
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchSummary, TransformResult};
