//! 直方图注册中心
//!
//! 以指标名为键做去重：同名直方图只创建、注册一次，同名钩子共享同一份
//! 句柄，从而避免底层注册表的重复注册问题。check-then-insert 序列以
//! 互斥锁保护，并发构造同名钩子不会产生重复注册。
//!
//! 注册中心由调用方创建并显式传给各钩子，生命周期可控，
//! 不存在进程级的隐藏全局状态。
//!
use std::borrow::Cow;
use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::{Family, MetricConstructor};
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;

/// 延迟直方图的标签集合（动态键值对，按插入顺序编码）
pub type LabelPairs = Vec<(String, String)>;

/// 延迟直方图族：同名族内按标签集合区分样本序列
pub type LatencyFamily = Family<LabelPairs, Histogram, HistogramCtor>;

/// 默认直方图桶（毫秒）
pub const DEFAULT_BUCKETS_MS: [f64; 10] = [
    10.0, 25.0, 50.0, 100.0, 300.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0,
];

/// 按配置的桶构造直方图
#[derive(Clone, Debug)]
pub struct HistogramCtor {
    buckets: Vec<f64>,
}

impl MetricConstructor<Histogram> for HistogramCtor {
    fn new_metric(&self) -> Histogram {
        Histogram::new(self.buckets.iter().copied())
    }
}

/// 直方图注册中心
pub struct MetricsHub {
    registry: RwLock<Registry>,
    histograms: Mutex<HashMap<String, LatencyFamily>>,
}

impl MetricsHub {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            histograms: Mutex::new(HashMap::new()),
        }
    }

    /// 获取（或创建并注册）指定名字的延迟直方图族
    ///
    /// 首次出现的名字会以给定桶创建直方图族并注册；`const_labels`
    /// 非空时经由子注册表固化为常量标签。对已存在的名字直接返回
    /// 共享句柄，后续调用方给出的桶与常量标签不再生效。
    pub fn latency_histogram(
        &self,
        name: &str,
        help: &str,
        buckets: &[f64],
        const_labels: &[(String, String)],
    ) -> LatencyFamily {
        let mut histograms = self.histograms.lock();
        if let Some(existing) = histograms.get(name) {
            return existing.clone();
        }

        let family = LatencyFamily::new_with_constructor(HistogramCtor {
            buckets: buckets.to_vec(),
        });

        let mut registry = self.registry.write();
        let target = const_labels.iter().fold(&mut *registry, |sub, (key, value)| {
            sub.sub_registry_with_label((Cow::Owned(key.clone()), Cow::Owned(value.clone())))
        });
        target.register(name, help, family.clone());
        tracing::debug!(metric = name, "registered latency histogram");

        histograms.insert(name.to_string(), family.clone());
        family
    }

    /// 已注册的直方图数量
    pub fn len(&self) -> usize {
        self.histograms.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.histograms.lock().is_empty()
    }

    /// 指定名字的直方图是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.histograms.lock().contains_key(name)
    }

    /// 以 Prometheus 文本格式导出全部指标
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        let registry = self.registry.read();
        encode(&mut buffer, &registry).expect("encoding metrics should succeed");
        buffer
    }
}

impl Default for MetricsHub {
    fn default() -> Self {
        Self::new()
    }
}
