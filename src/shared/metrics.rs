//! Prometheus Metrics Module
//!
//! 提供彩票核对流程的核心指标
//!
//! ## 指标类型
//! - **Counter**: 彩票行数（有效/无效）、开奖录入次数、核对次数、各奖级结果数
//! - **Histogram**: 单次核对耗时
//!
//! ## 使用示例
//! ```rust,ignore
//! use powerball_checker::shared::metrics::METRICS;
//!
//! METRICS.ticket_rows_total.with_label_values(&["valid"]).inc();
//! println!("{}", METRICS.export());
//! ```

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram, CounterVec, Encoder, Histogram, TextEncoder,
};

lazy_static! {
    /// 全局Metrics实例
    pub static ref METRICS: Metrics = Metrics::new();
}

/// 核对流程指标
pub struct Metrics {
    /// 彩票行数 (按状态: valid/rejected)
    pub ticket_rows_total: CounterVec,

    /// 开奖号码录入次数 (按状态: valid/rejected)
    pub draws_total: CounterVec,

    /// 核对次数 (按结果: ok/not_ready)
    pub checks_total: CounterVec,

    /// 每张彩票的奖级结果
    pub outcomes_total: CounterVec,

    /// 单次核对耗时 (微秒)
    pub check_duration: Histogram,
}

impl Metrics {
    /// 创建新的Metrics实例
    ///
    /// Registration only fails on a duplicate name, which `lazy_static`
    /// rules out.
    pub fn new() -> Self {
        Self {
            ticket_rows_total: register_counter_vec!(
                "powerball_ticket_rows_total",
                "Ticket rows processed by validation status",
                &["status"]
            )
            .expect("register powerball_ticket_rows_total"),

            draws_total: register_counter_vec!(
                "powerball_draws_total",
                "Draw inputs processed by validation status",
                &["status"]
            )
            .expect("register powerball_draws_total"),

            checks_total: register_counter_vec!(
                "powerball_checks_total",
                "Check requests by result",
                &["result"]
            )
            .expect("register powerball_checks_total"),

            outcomes_total: register_counter_vec!(
                "powerball_outcomes_total",
                "Tickets evaluated by prize tier",
                &["tier"]
            )
            .expect("register powerball_outcomes_total"),

            check_duration: register_histogram!(
                "powerball_check_duration_microseconds",
                "Duration of one check over the loaded ticket set",
                vec![1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0]
            )
            .expect("register powerball_check_duration_microseconds"),
        }
    }

    /// 导出Prometheus格式的指标
    pub fn export(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::warn!(error = %e, "failed to encode metrics");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
