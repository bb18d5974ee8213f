//! Prometheus 指标钩子（动态标签版）
//!
//! 每次观测时携带完整标签集合：`service`、`story_name`、`step_name`、
//! `status`，以及配置中附加的静态标签。与常量标签版
//! （[`crate::prometheus_const`]）产生等价的观测值。
//!
use bon::Builder;

use crate::hook::StoryHook;
use crate::metrics::{DEFAULT_BUCKETS_MS, LabelPairs, LatencyFamily, MetricsHub};
use crate::story::{StepInfo, StepStatus, StoryContext};

/// 指标钩子配置
#[derive(Builder, Debug, Clone)]
pub struct HookConfig {
    /// `service` 标签使用的服务名
    #[builder(default = "dddkit_stories".to_string())]
    pub app_name: String,
    /// 指标名前缀
    #[builder(default = "dddkit_stories".to_string())]
    pub prefix: String,
    /// 附加到全部观测上的静态标签
    #[builder(default)]
    pub labels: Vec<(String, String)>,
    /// 直方图桶（毫秒）；缺省为 [`DEFAULT_BUCKETS_MS`]
    pub buckets: Option<Vec<f64>>,
}

impl HookConfig {
    /// 步骤元数据在执行上下文中使用的键
    pub fn meta_key(&self) -> String {
        format!("{}_metrics", self.prefix)
    }

    /// 故事级累计延迟指标名
    pub fn story_metric_name(&self) -> String {
        format!("{}_executions_latency_ms", self.prefix)
    }

    /// 步骤级延迟指标名
    pub fn step_metric_name(&self) -> String {
        format!("{}_step_executions_latency_ms", self.prefix)
    }

    pub(crate) fn buckets_ms(&self) -> Vec<f64> {
        self.buckets
            .clone()
            .unwrap_or_else(|| DEFAULT_BUCKETS_MS.to_vec())
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// 故事步骤的 Prometheus 观测钩子
///
/// 构造时从前缀派生元数据键与两个指标名，并向注册中心申请直方图句柄；
/// 同名配置的多个钩子实例共享同一份直方图。
pub struct PrometheusHook {
    config: HookConfig,
    meta_key: String,
    story_latency: LatencyFamily,
    step_latency: LatencyFamily,
}

impl PrometheusHook {
    pub fn new(config: HookConfig, hub: &MetricsHub) -> Self {
        let buckets = config.buckets_ms();
        let story_latency = hub.latency_histogram(
            &config.story_metric_name(),
            "Story execution time",
            &buckets,
            &[],
        );
        let step_latency = hub.latency_histogram(
            &config.step_metric_name(),
            "Story step execution time",
            &buckets,
            &[],
        );

        Self {
            meta_key: config.meta_key(),
            config,
            story_latency,
            step_latency,
        }
    }

    /// 步骤元数据在上下文中使用的键
    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    fn step_labels(&self, context: &StoryContext, step: &StepInfo) -> LabelPairs {
        let mut labels = vec![
            ("service".to_string(), self.config.app_name.clone()),
            ("story_name".to_string(), context.story_name.clone()),
            ("step_name".to_string(), step.step_name.clone()),
            ("status".to_string(), step.status.as_str().to_string()),
        ];
        labels.extend(self.config.labels.iter().cloned());
        labels
    }

    fn story_labels(&self, context: &StoryContext, step: &StepInfo) -> LabelPairs {
        let mut labels = vec![
            ("service".to_string(), self.config.app_name.clone()),
            ("story_name".to_string(), context.story_name.clone()),
            ("status".to_string(), step.status.as_str().to_string()),
        ];
        labels.extend(self.config.labels.iter().cloned());
        labels
    }
}

impl StoryHook for PrometheusHook {
    fn after(&self, context: &StoryContext, step: &StepInfo) {
        self.step_latency
            .get_or_create(&self.step_labels(context, step))
            .observe(step.duration.as_millis() as f64);

        // 故事收尾：最后一步完成，或任一步失败
        if context.is_last_step(step) || step.status == StepStatus::Failed {
            self.story_latency
                .get_or_create(&self.story_labels(context, step))
                .observe(context.total_duration().as_millis() as f64);
        }
    }
}
