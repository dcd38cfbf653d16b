//! # 批量执行器
//!
//! 顺序执行批量变换任务。
//!
//! ## 功能
//! - 按输入顺序逐条处理，汇总结果顺序可复现
//! - 单条目失败（包括变换函数内的 panic）被限制在该条目内
//! - 进度条显示与逐条状态输出
//! - 结果统计汇总
//!
//! ## 依赖关系
//! - 被 `commands/icons.rs`, `commands/rewrite.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 输出逐条状态

use crate::utils::{output, progress};

use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// 单个条目的变换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// 变换已执行并产生效果
    Applied(String),
    /// 变换已执行但无需任何改动（幂等空操作）
    Skipped(String),
    /// 变换失败 (条目, 原因)
    Failed(String, String),
}

/// 批量变换结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 生效数量
    pub applied: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 逐条结果，保持输入顺序
    pub results: Vec<TransformResult>,
}

impl BatchSummary {
    /// 记录一条结果
    pub fn record(&mut self, result: TransformResult) {
        match &result {
            TransformResult::Applied(_) => self.applied += 1,
            TransformResult::Skipped(_) => self.skipped += 1,
            TransformResult::Failed(_, _) => self.failed += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// 失败详情 (条目, 原因)
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.results
            .iter()
            .filter_map(|r| match r {
                TransformResult::Failed(item, reason) => Some((item.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 进度条描述
    message: String,
    /// 是否输出逐条状态行
    report: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            report: true,
        }
    }

    /// 关闭逐条状态输出（测试用）
    pub fn silent(mut self) -> Self {
        self.report = false;
        self
    }

    /// 顺序处理条目列表
    ///
    /// 每个条目恰好被尝试一次；变换函数内的意外 panic 被捕获并
    /// 转换为该条目的 `Failed`，不会中断后续条目。
    pub fn run<T, F>(&self, items: &[T], transform: F) -> BatchSummary
    where
        T: Display,
        F: Fn(&T) -> TransformResult,
    {
        let pb = progress::create_progress_bar(items.len() as u64, &self.message);

        let mut summary = BatchSummary::default();

        for item in items {
            let result = match panic::catch_unwind(AssertUnwindSafe(|| transform(item))) {
                Ok(result) => result,
                Err(payload) => {
                    TransformResult::Failed(item.to_string(), panic_reason(payload))
                }
            };

            if self.report {
                pb.suspend(|| match &result {
                    TransformResult::Applied(msg) => output::print_success(msg),
                    TransformResult::Skipped(msg) => output::print_skip(msg),
                    TransformResult::Failed(item, reason) => {
                        output::print_error(&format!("{}: {}", item, reason))
                    }
                });
            }

            summary.record(result);
            pb.inc(1);
        }

        pb.finish_and_clear();

        summary
    }
}

/// 从 panic 载荷中提取可读原因
fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "transformation panicked".to_string()
    }
}
