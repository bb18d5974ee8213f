//! 故事执行观测钩子（dddkit-stories）
//!
//! 为外部的故事（story）步骤执行框架提供观测构件：
//! - 钩子契约（`hook`）与回调可见的最小上下文结构（`story`）；
//! - Prometheus 指标钩子（`prometheus`、`prometheus_const`）：
//!   每个步骤完成后记录步骤延迟，故事收尾（最后一步或任一步失败）时
//!   记录全部步骤的累计延迟；
//! - 显式的直方图注册中心（`metrics`）：同名指标只注册一次，
//!   同名钩子共享同一份直方图句柄。
//!
//! 步骤编排、重试与并发控制均属外部框架的职责；本 crate 只消费
//! 每步完成时同步送达的上下文快照。
//!
//! Prometheus 集成经由 `prometheus` 特性开关（默认开启）；关闭后仅保留
//! 钩子契约与上下文类型，后端缺失在编译期即可发现。
pub mod hook;
pub mod story;

#[cfg(feature = "prometheus")]
pub mod metrics;
#[cfg(feature = "prometheus")]
pub mod prometheus;
#[cfg(feature = "prometheus")]
pub mod prometheus_const;
