//! 故事执行的回调可见结构
//!
//! 步骤编排由外部的故事执行框架完成；这里只声明每步完成回调
//! 能够看到的最小上下文：步骤状态、耗时与有序的步骤列表。
//!
use std::fmt;
use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// 步骤完成状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Failed,
    Skipped,
}

impl StepStatus {
    /// 指标标签中使用的小写文本
    pub const fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Success => "success",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个步骤的执行信息
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct StepInfo {
    /// 步骤名
    pub step_name: String,
    /// 步骤在故事中的序号（从 0 开始）
    pub step_index: usize,
    /// 完成状态
    pub status: StepStatus,
    /// 步骤耗时
    pub duration: Duration,
}

/// 一次故事执行的上下文：按执行顺序排列的步骤列表
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct StoryContext {
    /// 故事类型名
    pub story_name: String,
    /// 全部步骤（含尚未执行步骤的占位信息，由框架维护）
    pub steps: Vec<StepInfo>,
}

impl StoryContext {
    /// 给定步骤是否是故事的最后一步
    pub fn is_last_step(&self, step: &StepInfo) -> bool {
        step.step_index + 1 == self.steps.len()
    }

    /// 全部步骤的累计耗时
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }
}
