//! # 领域变换模块
//!
//! 实现各命令的单条目变换逻辑。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 子模块: icon, endpoint

pub mod endpoint;
pub mod icon;
