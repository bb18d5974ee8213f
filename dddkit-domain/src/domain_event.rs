//! 聚合事件（Aggregate Event）
//!
//! 事件是发生在聚合上的既成事实：不可变、带 UTC 时间戳，
//! 由产生它的聚合独占持有（见 [`crate::aggregate::EventLog`]）。
//!
//! 事件的分类层级用嵌套枚举表达：外层变体即类别，内层枚举承载更具体的
//! 变体，「是否属于类别 X」的判定落在一次外层 `matches!` 上。

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 聚合事件载荷需要满足的通用能力边界
pub trait AggregateEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// 事件类型名（形如 `BasketEvent.Created`）
    fn event_type(&self) -> &'static str;

    /// 事件发生时间（构造时以 UTC 捕获）
    fn occurred_on(&self) -> DateTime<Utc>;
}

/// 事件发生时间
///
/// `Default`/[`OccurredOn::now`] 在构造一刻捕获当前 UTC 时间；
/// 序列化形态与内部的 `DateTime<Utc>` 完全一致。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct OccurredOn(DateTime<Utc>);

impl OccurredOn {
    /// 以当前 UTC 时间构造
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// 以给定时刻构造（用于回放或测试）
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub const fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for OccurredOn {
    fn default() -> Self {
        Self::now()
    }
}

impl From<OccurredOn> for DateTime<Utc> {
    fn from(occurred_on: OccurredOn) -> Self {
        occurred_on.0
    }
}

impl fmt::Display for OccurredOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
