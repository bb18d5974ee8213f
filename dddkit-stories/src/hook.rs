//! 钩子（Hook）契约
//!
//! 注册进外部故事执行框架的观察者：框架在每个步骤完成后、
//! 按步骤顺序同步调用一次 `after`。重复注册是安全的（各自独立观测），
//! 但同一次完成被重复回调会产生重复观测，由框架保证至多一次。
//!
use crate::story::{StepInfo, StoryContext};

/// 故事步骤观察者
pub trait StoryHook: Send + Sync {
    /// 步骤完成回调
    ///
    /// `context` 是本次故事执行的上下文快照，`step` 是刚完成的步骤。
    fn after(&self, context: &StoryContext, step: &StepInfo);
}
