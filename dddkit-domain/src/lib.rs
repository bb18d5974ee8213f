//! DDD 领域建模基础库（dddkit-domain）
//!
//! 提供以 DDD 为中心的自校验模型构件，用于在应用中实现：
//! - 值对象（`value_object`）、实体（`entity`）与聚合（`aggregate`）三类记录抽象
//! - 以静态声明的谓词列表实现的构造期校验（`check`）
//! - 聚合事件与仅追加事件日志（`domain_event`、`aggregate::EventLog`）
//! - 可组合的业务规约（`specification`）
//!
//! 校验在构造路径上同步执行、单线程、无挂起点，并且 fail-fast：
//! 第一条不满足的校验即返回错误，调用方永远观察不到处于无效状态的实例。
//!
//! 本 crate 不含调度、持久化与并发协调逻辑；事件日志默认按
//! 「每事务一个聚合」的单一所有者模型使用，由调用方的事务边界保证互斥。
//!
//! 典型用法：
//! 1. 为记录类型实现 [`check::Checkable`]，在 `checks()` 中静态声明全部谓词；
//! 2. 构造函数组装字段后调用 `checked()`，只向外返回通过校验的实例；
//! 3. 聚合内嵌 [`aggregate::EventLog`] 并实现 [`aggregate::Aggregate`]，
//!    由外围工作单元读取（`events`）与清空（`clear_events`）事件。
//!
pub mod aggregate;
pub mod check;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod specification;
pub mod value_object;
