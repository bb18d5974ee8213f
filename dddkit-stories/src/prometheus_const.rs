//! Prometheus 指标钩子（常量标签版）
//!
//! `service` 与配置的附加标签在创建直方图时固化为常量标签，
//! 每次观测只携带 `story_name`/`step_name`/`status`。与动态标签版
//! （[`crate::prometheus`]）产生等价的观测值，差异仅在标签的挂接方式。
//!
use crate::hook::StoryHook;
use crate::metrics::{LabelPairs, LatencyFamily, MetricsHub};
use crate::prometheus::HookConfig;
use crate::story::{StepInfo, StepStatus, StoryContext};

/// 常量标签版的故事步骤观测钩子
pub struct ConstLabelsHook {
    meta_key: String,
    story_latency: LatencyFamily,
    step_latency: LatencyFamily,
}

impl ConstLabelsHook {
    pub fn new(config: HookConfig, hub: &MetricsHub) -> Self {
        let mut const_labels = vec![("service".to_string(), config.app_name.clone())];
        const_labels.extend(config.labels.iter().cloned());

        let buckets = config.buckets_ms();
        let story_latency = hub.latency_histogram(
            &config.story_metric_name(),
            "Story execution time",
            &buckets,
            &const_labels,
        );
        let step_latency = hub.latency_histogram(
            &config.step_metric_name(),
            "Story step execution time",
            &buckets,
            &const_labels,
        );

        Self {
            meta_key: config.meta_key(),
            story_latency,
            step_latency,
        }
    }

    /// 步骤元数据在上下文中使用的键
    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    fn step_labels(context: &StoryContext, step: &StepInfo) -> LabelPairs {
        vec![
            ("story_name".to_string(), context.story_name.clone()),
            ("step_name".to_string(), step.step_name.clone()),
            ("status".to_string(), step.status.as_str().to_string()),
        ]
    }

    fn story_labels(context: &StoryContext, step: &StepInfo) -> LabelPairs {
        vec![
            ("story_name".to_string(), context.story_name.clone()),
            ("status".to_string(), step.status.as_str().to_string()),
        ]
    }
}

impl StoryHook for ConstLabelsHook {
    fn after(&self, context: &StoryContext, step: &StepInfo) {
        self.step_latency
            .get_or_create(&Self::step_labels(context, step))
            .observe(step.duration.as_millis() as f64);

        if context.is_last_step(step) || step.status == StepStatus::Failed {
            self.story_latency
                .get_or_create(&Self::story_labels(context, step))
                .observe(context.total_duration().as_millis() as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_and_extra_labels_are_constant() {
        let hub = MetricsHub::new();
        let hook = ConstLabelsHook::new(
            HookConfig::builder()
                .app_name("test".to_string())
                .prefix("const_unit".to_string())
                .labels(vec![("node".to_string(), "pod1".to_string())])
                .build(),
            &hub,
        );
        assert_eq!(hub.len(), 2);
        assert_eq!(hook.meta_key(), "const_unit_metrics");

        hook.story_latency
            .get_or_create(&vec![
                ("story_name".to_string(), "SampleStory".to_string()),
                ("status".to_string(), "success".to_string()),
            ])
            .observe(12.0);

        let output = hub.encode();
        assert!(output.contains("service=\"test\""));
        assert!(output.contains("node=\"pod1\""));
        assert!(output.contains("story_name=\"SampleStory\""));
    }
}
