//! 聚合（Aggregate）
//!
//! 聚合是事务边界与上下文的根实体：有标识、可变、可内嵌值对象与实体，
//! 并独占一份仅追加的事件日志，供外围工作单元读取与清空。
//!
use std::fmt;
use std::slice::Iter;

use crate::domain_event::AggregateEvent;
use crate::entity::Entity;

/// 聚合根接口
///
/// 关键特征：
///
/// * 有标识、可变、可包含逻辑；
/// * 可内嵌值对象、实体与其他聚合；
/// * 作为事务边界，经由仓储整体保存；
/// * 持有事件日志：`record` 追加、`events` 读取、`clear_events` 清空。
pub trait Aggregate: Entity {
    /// 聚合类型名（用于仓储与日志标注）
    const TYPE: &'static str;

    /// 该聚合产生的领域事件类型
    type Event: AggregateEvent;

    /// 事件日志的只读访问（实现者提供存储字段）
    fn event_log(&self) -> &EventLog<Self::Event>;

    /// 事件日志的可变访问
    fn event_log_mut(&mut self) -> &mut EventLog<Self::Event>;

    /// 记录一条事件，追加到日志末尾（保持插入顺序）
    fn record(&mut self, event: Self::Event) {
        self.event_log_mut().record(event);
    }

    /// 迄今记录的全部事件，按记录顺序
    fn events(&self) -> &[Self::Event] {
        self.event_log().as_slice()
    }

    /// 清空事件日志；此后 `events` 为空，直到记录新事件
    fn clear_events(&mut self) {
        self.event_log_mut().clear();
    }
}

/// 仅追加的事件日志
///
/// 不参与相等性比较，调试输出只展示长度，因此聚合可以直接派生
/// `PartialEq`/`Debug` 而无需排除该字段。未做内部同步：按
/// 「每事务一个聚合」的单一所有者模型使用。
#[derive(Clone)]
pub struct EventLog<E> {
    events: Vec<E>,
}

impl<E> EventLog<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// 追加一条事件
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// 事件的只读切片视图
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    /// 清空日志
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 迭代事件引用（不消费日志）
    pub fn iter(&self) -> Iter<'_, E> {
        self.events.iter()
    }
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

// 事件日志不参与聚合的相等性比较
impl<E> PartialEq for EventLog<E> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<E> Eq for EventLog<E> {}

impl<E> fmt::Debug for EventLog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("len", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<'a, E> IntoIterator for &'a EventLog<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E> IntoIterator for EventLog<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
